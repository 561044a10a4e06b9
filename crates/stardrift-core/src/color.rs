//! Fixed glow palette.

/// One of the four glow colors a star can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlowColor {
    White,
    Aqua,
    Peach,
    Lilac,
}

impl GlowColor {
    /// Every glow color, in palette order.
    pub const ALL: [GlowColor; 4] = [
        GlowColor::White,
        GlowColor::Aqua,
        GlowColor::Peach,
        GlowColor::Lilac,
    ];

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            GlowColor::White => (0xff, 0xff, 0xff),
            GlowColor::Aqua => (0xaa, 0xff, 0xff),
            GlowColor::Peach => (0xff, 0xd6, 0xa5),
            GlowColor::Lilac => (0xd6, 0xa5, 0xff),
        }
    }
}
