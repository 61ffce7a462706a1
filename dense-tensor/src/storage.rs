/// An owned contiguous buffer whose length is fixed at creation.
///
/// Cloning copies every element into a fresh allocation: a buffer is never shared between two owners.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Storage<T> {
    buf: Box<[T]>,
}

impl<T> Storage<T> {
    /// Creates a buffer of `len` default values.
    pub fn filled(len: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::from_elem(T::default(), len)
    }

    /// Creates a buffer of `len` copies of `value`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self {
            buf: vec![value; len].into_boxed_slice(),
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            buf: data.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }

    /// Overwrites this buffer with the content of `other`, reusing the allocation when lengths agree.
    pub fn copy_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        if self.buf.len() == other.buf.len() {
            self.buf.clone_from_slice(&other.buf);
        } else {
            self.buf = other.buf.clone();
        }
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self { buf: Box::default() }
    }
}
