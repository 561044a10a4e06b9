//! Character constants for background sprites.

/// Star glyphs from smallest to largest.
pub const STAR_CHARS: &[char] = &['·', '•', '✦'];

/// Star glyph used at the peak of a glow pulse.
pub const STAR_FLARE: char = '✧';

/// Leading glyph of a comet streak.
pub const COMET_HEAD: char = '●';

/// Comet tail glyphs from the head outward.
pub const COMET_TAIL_CHARS: &[char] = &['━', '─', '╌', '·'];
