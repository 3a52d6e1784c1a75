//! Line-oriented text output

use std::io::{self, Write};

/// Value written for drawn index `k`: floor(k + offset)
///
/// Out-of-range results saturate at the `i64` bounds.
#[inline]
pub fn output_value(k: usize, offset: f64) -> i64 {
    (k as f64 + offset).floor() as i64
}

/// Writes drawn indices to a text sink, one value per line
pub struct SampleWriter<'a, W: Write> {
    sink: &'a mut W,
    offset: f64,
    lines: u64,
}

impl<'a, W: Write> SampleWriter<'a, W> {
    pub fn new(sink: &'a mut W, offset: f64) -> Self {
        Self {
            sink,
            offset,
            lines: 0,
        }
    }

    /// Write one block of drawn indices in order
    pub fn write_block(&mut self, block: &[usize]) -> io::Result<()> {
        for &k in block {
            writeln!(self.sink, "{}", output_value(k, self.offset))?;
        }
        self.lines += block.len() as u64;
        Ok(())
    }

    /// Lines written so far
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_value_no_offset() {
        assert_eq!(output_value(1, 0.0), 1);
        assert_eq!(output_value(99_999, 0.0), 99_999);
    }

    #[test]
    fn test_output_value_floors() {
        assert_eq!(output_value(3, 0.5), 3);
        assert_eq!(output_value(3, 0.999), 3);
        assert_eq!(output_value(3, 10.0), 13);
        // floor, not truncation toward zero
        assert_eq!(output_value(1, -1.5), -1);
        assert_eq!(output_value(2, -5.25), -4);
    }

    #[test]
    fn test_output_value_saturates() {
        assert_eq!(output_value(1, 1e300), i64::MAX);
        assert_eq!(output_value(1, -1e300), i64::MIN);
    }

    #[test]
    fn test_write_block() {
        let mut sink = Vec::new();
        let mut writer = SampleWriter::new(&mut sink, 0.0);

        writer.write_block(&[3, 1, 1, 7]).unwrap();
        writer.write_block(&[2]).unwrap();
        assert_eq!(writer.lines_written(), 5);
        writer.flush().unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), "3\n1\n1\n7\n2\n");
    }

    #[test]
    fn test_write_block_with_offset() {
        let mut sink = Vec::new();
        let mut writer = SampleWriter::new(&mut sink, -1.0);

        writer.write_block(&[1, 2, 10]).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "0\n1\n9\n");
    }
}
