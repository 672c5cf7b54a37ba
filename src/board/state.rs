use super::{Color, Occupant, Piece, PieceKind, PieceState, Square};

pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board is a plain container: it performs no rule checks. Each occupied
/// square also carries the [`PieceState`] of the piece standing on it, so the
/// flags travel with the piece when it is relocated through [`Board::place`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Occupant>; 64],
}

impl Board {
    /// A board in the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset_to_start();
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Put every piece back on its starting square with cleared movement flags.
    pub fn reset_to_start(&mut self) {
        self.squares = [None; 64];
        for (i, kind) in BACK_RANK.iter().enumerate() {
            let col = i as u8 + 1;
            self.set(Square::at(1, col), Some(Piece::new(Color::White, *kind)));
            self.set(Square::at(8, col), Some(Piece::new(Color::Black, *kind)));
            self.set(Square::at(2, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            self.set(Square::at(7, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
    }

    /// The piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].map(|o| o.piece)
    }

    /// Overwrite `sq`. A placed piece starts with cleared movement flags.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece.map(Occupant::fresh);
    }

    /// The piece on `sq` together with its movement flags.
    #[inline]
    #[must_use]
    pub fn occupant(&self, sq: Square) -> Option<Occupant> {
        self.squares[sq.index()]
    }

    /// Overwrite `sq` with an exact occupant, flags included.
    #[inline]
    pub fn place(&mut self, sq: Square, occupant: Option<Occupant>) {
        self.squares[sq.index()] = occupant;
    }

    /// Movement flags of the piece on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn state(&self, sq: Square) -> Option<PieceState> {
        self.squares[sq.index()].map(|o| o.state)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|p| p.color)
    }

    /// Every occupied square with its occupant, a1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(move |sq| self.occupant(sq).map(|o| (sq, o)))
    }

    /// Occupied squares holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        self.iter().filter(move |(_, o)| o.piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.iter()
            .find(|(_, o)| o.piece == king)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|o| o.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
