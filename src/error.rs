//! error system used around the library.
use std::{error, fmt, io};

///Anything that can go wrong while fetching a page or keeping it on disk.
///
///`Connect`, `Send` and `Read` describe a failed conversation with the server;
///they are recoverable and only ever show up inside a partial
///[`Page`](crate::fetch::Page). `Save` means the fetched text could not be
///written to the output file and is always propagated to the caller.
#[derive(Debug)]
pub enum Error {
    Connect(io::Error),
    Send(io::Error),
    Read(io::Error),
    Save(io::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        use self::Error::*;

        match self {
            Connect(e) | Send(e) | Read(e) | Save(e) => Some(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;

        let (what, err) = match self {
            Connect(e) => ("cannot connect to the server", e),
            Send(e) => ("cannot send the request", e),
            Read(e) => ("connection failed while reading the response", e),
            Save(e) => ("cannot write the output file", e),
        };
        write!(f, "Error: {}: {}", what, err)
    }
}
