use crate::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizeError {
    #[error("cannot normalize an empty vector")]
    Empty,
    #[error("cannot normalize a vector with zero magnitude")]
    ZeroMagnitude,
}

/// Scale a vector in place so its Euclidean magnitude is 1.
///
/// A vector whose elements are all zero has no direction and is rejected,
/// leaving the input untouched. Elements are scaled by the largest absolute
/// element before squaring, so neither large nor tiny vectors overflow or
/// underflow the sum of squares. NaN elements are not detected and propagate
/// to every element.
pub fn normalize<T: Scalar>(vector: &mut [T]) -> Result<(), NormalizeError> {
    if vector.is_empty() {
        log::warn!("refusing to normalize an empty vector");
        return Err(NormalizeError::Empty);
    }

    if vector.iter().all(|&element| element == T::ZERO) {
        log::warn!(
            "refusing to normalize a {}-element vector with zero magnitude",
            vector.len()
        );
        return Err(NormalizeError::ZeroMagnitude);
    }

    let mut max = T::ZERO;
    for &element in vector.iter() {
        let abs = if element < T::ZERO { -element } else { element };
        if abs > max {
            max = abs;
        }
    }

    let mut square_sum = T::ZERO;
    for &element in vector.iter() {
        let scaled = element / max;
        square_sum += scaled * scaled;
    }
    let scaled_magnitude = square_sum.sqrt();

    for element in vector.iter_mut() {
        *element = *element / max / scaled_magnitude;
    }

    Ok(())
}

/// By-value [`normalize`] for fixed size vectors.
pub fn normalized<T: Scalar, const N: usize>(
    mut vector: [T; N],
) -> Result<[T; N], NormalizeError> {
    normalize(&mut vector)?;
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use fixed::types::I16F16;

    #[track_caller]
    fn assert_unit(vector: &[f64]) {
        let magnitude = vector.iter().map(|element| element * element).sum::<f64>().sqrt();
        assert_abs_diff_eq!(magnitude, 1., epsilon = 1e-12);
    }

    #[test]
    fn normalizes_to_unit_magnitude() {
        let mut vector = [3., 4.];
        normalize(&mut vector).unwrap();
        assert_abs_diff_eq!(vector[0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(vector[1], 0.8, epsilon = 1e-12);

        for mut vector in [
            vec![1e-6],
            vec![-2.],
            vec![1., -0.5, -0.5],
            vec![13., 21., -34.],
            vec![0., 0., 0., 7.],
            vec![1e150, 1e150],
        ] {
            normalize(&mut vector).unwrap();
            dbg!(&vector);
            assert_unit(&vector);
        }
    }

    #[test]
    fn preserves_direction() {
        let mut vector = [-2., 0., 6.];
        normalize(&mut vector).unwrap();
        assert!(vector[0] < 0.);
        assert_eq!(vector[1], 0.);
        assert_abs_diff_eq!(vector[2] / vector[0], -3., epsilon = 1e-12);
    }

    #[test]
    fn idempotent_on_unit_vectors() {
        let mut vector = [0.6, 0.8];
        normalize(&mut vector).unwrap();
        assert_abs_diff_eq!(vector[0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(vector[1], 0.8, epsilon = 1e-12);

        let once = normalized([1., 2., 3.]).unwrap();
        let twice = normalized(once).unwrap();
        for (once, twice) in once.iter().zip(twice) {
            assert_abs_diff_eq!(*once, twice, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_vector_is_rejected() {
        let mut vector = [0., -0., 0.];
        assert_eq!(normalize(&mut vector), Err(NormalizeError::ZeroMagnitude));
        assert_eq!(vector, [0., 0., 0.]);
        assert_eq!(normalized([0f32; 4]), Err(NormalizeError::ZeroMagnitude));
    }

    #[test]
    fn empty_vector_is_rejected() {
        let mut vector: [f64; 0] = [];
        assert_eq!(normalize(&mut vector), Err(NormalizeError::Empty));
    }

    #[test]
    fn nan_propagates() {
        let mut vector = [f64::NAN, 1.];
        normalize(&mut vector).unwrap();
        assert!(vector.iter().all(|element| element.is_nan()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            NormalizeError::ZeroMagnitude.to_string(),
            "cannot normalize a vector with zero magnitude"
        );
        assert_eq!(
            NormalizeError::Empty.to_string(),
            "cannot normalize an empty vector"
        );
    }

    #[test]
    fn fixed_point() {
        let mut vector = [I16F16::from_num(3), I16F16::from_num(-4)];
        normalize(&mut vector).unwrap();
        dbg!(&vector);
        assert!(vector[0].abs_diff(I16F16::from_num(0.6)) < 0.001);
        assert!(vector[1].abs_diff(I16F16::from_num(-0.8)) < 0.001);
    }

    #[test]
    fn large_vector_does_not_overflow() {
        let mut vector = [1e200, 1e200];
        normalize(&mut vector).unwrap();
        dbg!(&vector);
        assert_abs_diff_eq!(vector[0], 0.5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(vector[1], 0.5f64.sqrt(), epsilon = 1e-12);

        let mut vector = [f64::MAX, -f64::MAX, 0.];
        normalize(&mut vector).unwrap();
        assert_unit(&vector);
    }

    #[test]
    fn tiny_vector_is_not_zero_magnitude() {
        let mut vector = [1e-200, 0.];
        normalize(&mut vector).unwrap();
        assert_eq!(vector, [1., 0.]);

        let mut vector = [-3e-320, 4e-320];
        normalize(&mut vector).unwrap();
        assert_unit(&vector);
    }

    #[test]
    fn fixed_point_beyond_square_range() {
        let mut vector = [I16F16::from_num(200), I16F16::from_num(150)];
        normalize(&mut vector).unwrap();
        dbg!(&vector);
        assert!(vector[0].abs_diff(I16F16::from_num(0.8)) < 0.001);
        assert!(vector[1].abs_diff(I16F16::from_num(0.6)) < 0.001);

        let mut vector = [I16F16::from_num(30_000), I16F16::from_num(-30_000)];
        normalize(&mut vector).unwrap();
        assert!(vector[0].abs_diff(I16F16::from_num(0.7071)) < 0.001);
        assert!(vector[1].abs_diff(I16F16::from_num(-0.7071)) < 0.001);
    }

    #[test]
    fn fixed_point_smallest_step() {
        let mut vector = [I16F16::DELTA, -I16F16::DELTA];
        normalize(&mut vector).unwrap();
        assert!(vector[0].abs_diff(I16F16::from_num(0.7071)) < 0.001);
        assert!(vector[1].abs_diff(I16F16::from_num(-0.7071)) < 0.001);
    }
}
