//! In-place element-wise updates

use polybound_core::{check, Scalar, Sequence, SequenceMut};

/// `op(&mut x[i], y[i])` for every `i`; lengths must match
///
/// ```rust
/// use polybound_elementwise::zip_assign;
///
/// let mut x = [1, 2, 3];
/// zip_assign(&mut x, &[10, 20, 30], |a, b| *a += b);
/// assert_eq!(x, [11, 22, 33]);
/// ```
pub fn zip_assign<X, Y, T, F>(x: &mut X, y: &Y, mut op: F)
where
    X: SequenceMut<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    T: Copy,
    F: FnMut(&mut T, T),
{
    const {
        assert!(
            X::SIZE.compatible(Y::SIZE),
            "element-wise operands have different compile-time sizes"
        )
    };
    check!(
        x.len() == y.len(),
        "element-wise operands have different lengths: {} and {}",
        x.len(),
        y.len()
    );
    for (a, &b) in x.as_mut_slice().iter_mut().zip(y.as_slice()) {
        op(a, b);
    }
}

/// `op(&mut x[i])` for every `i`
pub fn map_assign<X, T, F>(x: &mut X, op: F)
where
    X: SequenceMut<Item = T> + ?Sized,
    F: FnMut(&mut T),
{
    x.as_mut_slice().iter_mut().for_each(op);
}

/// `x[i] += y[i]`
pub fn add_assign<X, Y, T>(x: &mut X, y: &Y)
where
    X: SequenceMut<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    T: Scalar,
{
    zip_assign(x, y, |a, b| *a += b);
}

/// `x[i] -= y[i]`
pub fn sub_assign<X, Y, T>(x: &mut X, y: &Y)
where
    X: SequenceMut<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    T: Scalar,
{
    zip_assign(x, y, |a, b| *a -= b);
}

/// `x[i] *= y[i]`
pub fn mul_assign<X, Y, T>(x: &mut X, y: &Y)
where
    X: SequenceMut<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    T: Scalar,
{
    zip_assign(x, y, |a, b| *a *= b);
}

/// `x[i] /= y[i]`
pub fn div_assign<X, Y, T>(x: &mut X, y: &Y)
where
    X: SequenceMut<Item = T> + ?Sized,
    Y: Sequence<Item = T> + ?Sized,
    T: Scalar,
{
    zip_assign(x, y, |a, b| *a /= b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use polybound_core::InlineVec;

    #[test]
    fn test_arithmetic_assign() {
        let mut x = [10, 20, 30];
        add_assign(&mut x, &[1, 2, 3]);
        assert_eq!(x, [11, 22, 33]);
        sub_assign(&mut x, &[1, 2, 3]);
        assert_eq!(x, [10, 20, 30]);
        mul_assign(&mut x, &[2, 2, 2]);
        assert_eq!(x, [20, 40, 60]);
        div_assign(&mut x, &[4, 4, 4]);
        assert_eq!(x, [5, 10, 15]);
    }

    #[test]
    fn test_mixed_kinds() {
        let mut x = InlineVec::<f64, 8>::from_slice(&[1.0, 2.0]);
        add_assign(&mut x, &vec![0.5, 0.5]);
        assert_eq!(x, [1.5, 2.5]);
        map_assign(&mut x, |a| *a *= 2.0);
        assert_eq!(x, [3.0, 5.0]);
    }

    #[test]
    #[should_panic(expected = "element-wise operands have different lengths: 3 and 2")]
    fn test_length_mismatch() {
        let mut x = vec![1, 2, 3];
        add_assign(&mut x, &vec![1, 2]);
    }
}
