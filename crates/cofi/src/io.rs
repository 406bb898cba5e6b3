//! Binary ratings file reader.
//!
//! The on-disk format is little-endian: a header of two u64 values (`nrows`,
//! `ncols`) followed by fixed-size 17-byte records of `(u64 row, u64 col,
//! u8 rating)` until end of file. The record count is inferred from the file
//! length; there is no explicit count field.

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use cofi_sparse::CooMatrix;

/// Bytes per `(row, col, rating)` record.
const RECORD_SIZE: usize = 2 * 8 + 1;

/// Read a ratings file into COO form.
///
/// Ratings are u8 on the wire and promote to `f32`. Duplicate coordinates
/// and zero ratings pass through untouched; compression resolves both.
pub fn read_coo<P: AsRef<Path>>(path: P) -> io::Result<CooMatrix> {
    let file = File::open(path)?;
    read_coo_from(BufReader::new(file))
}

/// Read the ratings format from any byte stream.
pub fn read_coo_from<R: Read>(mut reader: R) -> io::Result<CooMatrix> {
    let nrows = reader.read_u64::<LittleEndian>()? as usize;
    let ncols = reader.read_u64::<LittleEndian>()? as usize;

    let mut coo = CooMatrix::new(nrows, ncols);
    let mut record = [0u8; RECORD_SIZE];

    while read_record(&mut reader, &mut record)? {
        let row = LittleEndian::read_u64(&record[0..8]) as usize;
        let col = LittleEndian::read_u64(&record[8..16]) as usize;
        let rating = record[16];
        coo.push(row, col, rating as f32);
    }

    Ok(coo)
}

/// Fill `buf` with the next record. Returns `Ok(false)` at end of input; a
/// trailing partial record is treated as end of input, like a short final
/// fixed-size read.
fn read_record<R: Read>(reader: &mut R, buf: &mut [u8; RECORD_SIZE]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Ok(false),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(true)
}
