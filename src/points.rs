use nalgebra::Point3;

/// Errors related to [Points].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("points need at least 3 channels (xyz), but {0} were requested")]
    TooFewChannels(i64),
    #[error("{len} floats can't be split into points of {floats_per_point} channels")]
    Misaligned { len: usize, floats_per_point: usize },
    #[error("mesh was created with {expected} channels per point, but {found} were given")]
    ChannelMismatch { expected: usize, found: usize },
}

/// Per-point vertex attributes, stored as one flat array.
///
/// The first three channels of each point are its position; any further channels (color, uv,
/// ...) are carried along untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    data: Vec<f32>,
    floats_per_point: usize,
}

impl Points {
    pub fn new(data: Vec<f32>, floats_per_point: usize) -> Result<Self, AttributeError> {
        if floats_per_point < 3 {
            return Err(AttributeError::TooFewChannels(floats_per_point as i64));
        }
        if data.len() % floats_per_point != 0 {
            return Err(AttributeError::Misaligned {
                len: data.len(),
                floats_per_point,
            });
        }
        Ok(Self {
            data,
            floats_per_point,
        })
    }

    /// As [Points::new], with the channel count given as a signed integer.
    pub fn from_signed(data: &[f32], floats_per_point: i32) -> Result<Self, AttributeError> {
        match usize::try_from(floats_per_point) {
            Ok(f) => Self::new(data.to_vec(), f),
            Err(_) => Err(AttributeError::TooFewChannels(floats_per_point.into())),
        }
    }

    /// Plain xyz positions.
    pub fn from_positions(positions: impl IntoIterator<Item = Point3<f32>>) -> Self {
        Self {
            data: positions
                .into_iter()
                .flat_map(|p| [p.x, p.y, p.z])
                .collect(),
            floats_per_point: 3,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.floats_per_point
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn floats_per_point(&self) -> usize {
        self.floats_per_point
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Every channel of point `i`.
    ///
    /// # Panics
    ///
    /// * `i` >= `self.len()`
    #[inline]
    pub fn point(&self, i: usize) -> &[f32] {
        let start = i * self.floats_per_point;
        &self.data[start..start + self.floats_per_point]
    }

    /// The position of point `i`.
    ///
    /// # Panics
    ///
    /// * `i` >= `self.len()`
    #[inline]
    pub fn position(&self, i: usize) -> Point3<f32> {
        let p = self.point(i);
        Point3::new(p[0], p[1], p[2])
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.floats_per_point)
    }
}
