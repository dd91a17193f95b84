use crate::dims::Dims;

/// Row-major 2D storage backed by a single `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Builds the array by calling `f` for every position in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, Dims) -> T) -> Self {
        let buf = Dims::iter_fill(Dims::ZERO, Dims(width as i32, height as i32))
            .enumerate()
            .map(|(i, pos)| f(i, pos))
            .collect();

        Self { buf, width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let Dims(x, y) = pos;
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_idx(&self, idx: usize) -> Option<&T> {
        self.buf.get(idx)
    }

    pub fn get_idx_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.buf.get_mut(idx)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Rows from top to bottom, each as a slice from left to right.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.buf.chunks_exact(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let array = Array2D::from_fn(3, 2, |i, _| i);
        for pos in array.iter_pos() {
            let idx = array.dim_to_idx(pos).unwrap();
            assert_eq!(array.get(pos), Some(&idx));
            assert_eq!(array.idx_to_dim(idx), Some(pos));
        }
        assert_eq!(array.len(), 6);
    }

    #[test]
    fn out_of_bounds() {
        let array = Array2D::from_fn(3, 2, |_, pos| pos);
        assert_eq!(array.get(Dims(-1, 0)), None);
        assert_eq!(array.get(Dims(0, -1)), None);
        assert_eq!(array.get(Dims(3, 0)), None);
        assert_eq!(array.get(Dims(0, 2)), None);
        assert_eq!(array.idx_to_dim(6), None);
        assert_eq!(array.get(Dims(2, 1)), Some(&Dims(2, 1)));
    }

    #[test]
    fn rows_concatenate_to_buffer() {
        let array = Array2D::from_fn(4, 3, |i, _| i);
        let rows: Vec<&[usize]> = array.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[4, 5, 6, 7]);
        assert_eq!(rows.concat(), array.as_slice());
    }
}
