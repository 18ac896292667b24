use nalgebra::Vector3;

/// Canonical reference direction used whenever a vector has no direction.
pub const UP: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);

pub trait VectorExtensions {
    fn length(&self) -> f32;
    fn distance_to(&self, other: &Vector3<f32>) -> f32;

    /// Unit vector, or `UP` for the zero vector.
    fn normalize_or_up(&self) -> Vector3<f32>;

    /// Unit vector pointing from `self` to `other`.
    fn direction_to(&self, other: &Vector3<f32>) -> Vector3<f32>;

    /// Unsigned angle in radians between two directions.
    fn angle_to(&self, other: &Vector3<f32>) -> f32;

    /// Projection onto the ground plane.
    fn flatten(&self) -> Vector3<f32>;

    /// Removes the component along `normal`, leaving the tangential part.
    fn flatten_along(&self, normal: &Vector3<f32>) -> Vector3<f32>;

    /// Scales the vector so its length lies in `[min, max]`.
    fn cap_length(&self, min: f32, max: f32) -> Vector3<f32>;
}

impl VectorExtensions for Vector3<f32> {
    #[inline]
    fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    fn distance_to(&self, other: &Vector3<f32>) -> f32 {
        let diff = self - other;
        diff.dot(&diff).sqrt()
    }

    #[inline]
    fn normalize_or_up(&self) -> Vector3<f32> {
        let length = self.length();
        if length > f32::EPSILON {
            self / length
        } else {
            UP
        }
    }

    #[inline]
    fn direction_to(&self, other: &Vector3<f32>) -> Vector3<f32> {
        (other - self).normalize_or_up()
    }

    fn angle_to(&self, other: &Vector3<f32>) -> f32 {
        let cos = self.normalize_or_up().dot(&other.normalize_or_up());
        cos.clamp(-1.0, 1.0).acos()
    }

    #[inline]
    fn flatten(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, 0.0)
    }

    fn flatten_along(&self, normal: &Vector3<f32>) -> Vector3<f32> {
        let unit = normal.normalize_or_up();
        self - unit * self.dot(&unit)
    }

    fn cap_length(&self, min: f32, max: f32) -> Vector3<f32> {
        let length = self.length();
        if length <= f32::EPSILON {
            return *self;
        }

        let capped = length.clamp(min, max);
        self * (capped / length)
    }
}
