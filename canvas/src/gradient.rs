use std::iter::{FromIterator};

///
/// The ramp used by `CharacterRamp::default()`, from lightest to darkest
///
pub const DEFAULT_RAMP: &str = ".:-=+*#@";

///
/// An ordered sequence of characters used to shade a gradient
///
/// The first character is used at the start of the gradient (the center of a gradient circle) and the
/// last character at the end.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterRamp(Vec<char>);

impl CharacterRamp {
    ///
    /// Creates a ramp from a list of characters
    ///
    pub fn new(chars: impl IntoIterator<Item=char>) -> Self {
        CharacterRamp(chars.into_iter().collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// The characters in this ramp, lightest first
    ///
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    ///
    /// The index of the character to use for a position along the gradient (0.0 = start, 1.0 = end)
    ///
    /// Positions outside of the 0-1 range are clamped to the nearest end of the ramp. Returns None if the
    /// ramp is empty.
    ///
    pub fn index_for_ratio(&self, ratio: f64) -> Option<usize> {
        if self.0.is_empty() {
            return None;
        }

        let last_idx    = self.0.len() - 1;
        let idx         = (ratio * (last_idx as f64)).floor();

        if idx.is_nan() || idx < 0.0 {
            Some(0)
        } else if idx > last_idx as f64 {
            Some(last_idx)
        } else {
            Some(idx as usize)
        }
    }

    ///
    /// The character to use for a position along the gradient (0.0 = start, 1.0 = end)
    ///
    #[inline]
    pub fn character_for_ratio(&self, ratio: f64) -> Option<char> {
        self.index_for_ratio(ratio).map(|idx| self.0[idx])
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        CharacterRamp::from(DEFAULT_RAMP)
    }
}

impl<'a> From<&'a str> for CharacterRamp {
    fn from(chars: &'a str) -> Self {
        CharacterRamp(chars.chars().collect())
    }
}

impl From<Vec<char>> for CharacterRamp {
    fn from(chars: Vec<char>) -> Self {
        CharacterRamp(chars)
    }
}

impl FromIterator<char> for CharacterRamp {
    fn from_iter<TIter: IntoIterator<Item=char>>(iter: TIter) -> Self {
        CharacterRamp(iter.into_iter().collect())
    }
}
