use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

/// Whole input, either memory-mapped or read into an owned buffer.
/// Dereferences to `&[u8]`.
pub enum FileData {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Deref for FileData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FileData::Mmap(m) => m,
            FileData::Owned(v) => v,
        }
    }
}

/// Regular files at least this large are mapped instead of read.
/// Below it, setting up and tearing down the mapping costs more than the
/// copy it saves.
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Read a whole file: mmap for large regular files, read() otherwise.
pub fn read_file(path: &Path) -> io::Result<FileData> {
    read_opened_file(File::open(path)?)
}

fn read_opened_file(mut file: File) -> io::Result<FileData> {
    let metadata = file.metadata()?;
    let len = metadata.len();

    if metadata.file_type().is_file() && len >= MMAP_THRESHOLD {
        // SAFETY: read-only mapping; the lines are copied out before the
        // mapping is dropped.
        if let Ok(mmap) = unsafe { Mmap::map(&file) } {
            #[cfg(target_os = "linux")]
            {
                let _ = mmap.advise(memmap2::Advice::Sequential);
            }
            return Ok(FileData::Mmap(mmap));
        }
        // mmap failed, fall through to read
    }

    let mut buf = Vec::with_capacity(len as usize);
    file.read_to_end(&mut buf)?;
    Ok(FileData::Owned(buf))
}

/// Read all of standard input.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// An input named on the command line, opened but not read yet.
#[derive(Debug)]
pub enum Input {
    Stdin,
    File(File),
}

impl Input {
    /// Read the whole input.
    pub fn read_all(self) -> io::Result<FileData> {
        match self {
            Input::Stdin => read_stdin().map(FileData::Owned),
            Input::File(file) => read_opened_file(file),
        }
    }
}

/// Open the input named on the command line: `-` is standard input,
/// anything else a path.
pub fn open_input(name: &str) -> io::Result<Input> {
    if name == "-" {
        Ok(Input::Stdin)
    } else {
        File::open(name).map(Input::File)
    }
}

/// Open and read the input named on the command line.
pub fn read_input(name: &str) -> io::Result<FileData> {
    open_input(name)?.read_all()
}
