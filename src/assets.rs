use std::path::{Path, PathBuf};

use cozy_chess::{Color, Piece};
use log::info;
use macroquad::texture::Image;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read piece image {path}")]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("cannot decode piece image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

pub const COLORS: [Color; 2] = [Color::White, Color::Black];

/// Image name of a piece: lowercase for Black, uppercase for White.
pub fn piece_symbol(color: Color, piece: Piece) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White { c.to_ascii_uppercase() } else { c }
}

pub fn image_path(dir: &Path, color: Color, piece: Piece) -> PathBuf {
    dir.join(format!("{}.png", piece_symbol(color, piece)))
}

fn slot(color: Color, piece: Piece) -> usize {
    color as usize * Piece::ALL.len() + piece as usize
}

/// One value per piece kind and colour.
#[derive(Clone, Debug)]
pub struct PieceSet<T> {
    items: Vec<T>,
}

impl<T> PieceSet<T> {
    pub fn try_build<E>(mut f: impl FnMut(Color, Piece) -> Result<T, E>) -> Result<Self, E> {
        let mut items = Vec::with_capacity(COLORS.len() * Piece::ALL.len());
        for color in COLORS {
            for piece in Piece::ALL {
                items.push(f(color, piece)?);
            }
        }
        Ok(Self { items })
    }

    pub fn get(&self, color: Color, piece: Piece) -> &T { &self.items[slot(color, piece)] }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> PieceSet<U> {
        PieceSet { items: self.items.iter().map(f).collect() }
    }
}

pub fn decode_image(path: &Path, bytes: &[u8]) -> Result<Image, AssetError> {
    Image::from_file_with_format(bytes, None)
        .map_err(|e| AssetError::Decode { path: path.to_path_buf(), reason: e.to_string() })
}

/// Reads and decodes all twelve piece images from `dir`. Any missing or
/// unreadable file fails the whole load.
pub fn load_piece_images(dir: &Path) -> Result<PieceSet<Image>, AssetError> {
    let set = PieceSet::try_build(|color, piece| {
        let path = image_path(dir, color, piece);
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Read { path: path.clone(), source })?;
        decode_image(&path, &bytes)
    })?;
    info!("loaded piece images from {}", dir.display());
    Ok(set)
}
