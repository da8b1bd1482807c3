//! Interactive input: read a dimension and then each element from a text stream.

use super::Vector;
use crate::core::traits::Element;
use crate::error::VecError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Whitespace-separated tokens pulled lazily from a reader, one line at a time.
struct Tokens<'r, R> {
    reader: &'r mut R,
    pending: VecDeque<String>,
}

impl<'r, R: BufRead> Tokens<'r, R> {
    fn new(reader: &'r mut R) -> Self {
        Self { reader, pending: VecDeque::new() }
    }

    fn next_token(&mut self) -> Result<String, VecError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended early").into());
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_parsed<V: FromStr>(&mut self, what: &'static str) -> Result<V, VecError> {
        let input = self.next_token()?;
        input.parse().map_err(|_| VecError::Parse { input, what })
    }
}

impl<T: Element + FromStr> Vector<T> {
    /// Prompt on `writer` for a dimension and then every element, reading answers from `reader`.
    ///
    /// The current contents are replaced only once every element has parsed.
    pub fn read_from<R: BufRead, W: Write>(&mut self, reader: &mut R, writer: &mut W) -> Result<(), VecError> {
        let mut tokens = Tokens::new(reader);
        write!(writer, "Input size: ")?;
        writer.flush()?;
        let size: usize = tokens.next_parsed("dimension")?;

        let mut elems = Vec::with_capacity(size);
        for i in 0..size {
            write!(writer, "Enter element {} of the vector: ", i)?;
            writer.flush()?;
            elems.push(tokens.next_parsed("element")?);
        }
        self.elems = elems;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_size_then_elements() {
        let mut input = "3\n1.5\n-2 4\n".as_bytes();
        let mut out = Vec::new();
        let mut v: Vector<f64> = Vector::filled(1, 9.0);
        v.read_from(&mut input, &mut out).unwrap();
        assert_eq!(v.as_slice(), &[1.5, -2.0, 4.0]);
        let prompts = String::from_utf8(out).unwrap();
        assert!(prompts.starts_with("Input size: Enter element 0 of the vector: "));
        assert!(prompts.ends_with("Enter element 2 of the vector: "));
    }

    #[test]
    fn bad_element_leaves_vector_unchanged() {
        let mut input = "2 7 x".as_bytes();
        let mut v = Vector::from(vec![1, 2, 3]);
        let err = v.read_from(&mut input, &mut io::sink()).unwrap_err();
        assert!(matches!(err, VecError::Parse { what: "element", .. }));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn early_eof_is_an_io_error() {
        let mut input = "4 1 2".as_bytes();
        let mut v: Vector<i64> = Vector::new();
        let err = v.read_from(&mut input, &mut io::sink()).unwrap_err();
        assert!(matches!(err, VecError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn zero_size_empties_vector() {
        let mut input = "0\n".as_bytes();
        let mut v = Vector::from(vec![1u8]);
        v.read_from(&mut input, &mut io::sink()).unwrap();
        assert!(v.is_empty());
    }
}
