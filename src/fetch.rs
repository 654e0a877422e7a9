//! fetching pages and keeping them on disk
use crate::{error::Error, target::FetchTarget};
use log::debug;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
    net::TcpStream,
    path::Path,
};

const CR_LF: &str = "\r\n";
const HTTP_V: &str = "HTTP/1.1";

///Builds the request message sent to the server. The bytes are fixed apart
///from the `Host` value: a `GET /HTTP/1.1` line with no space before the
///version, one `Host` header, and a spare blank line after the one that ends
///the headers. Both quirks are kept so the bytes on the wire stay stable.
pub fn request_msg(host: &str) -> Vec<u8> {
    let request_line = format!("GET /{}{}", HTTP_V, CR_LF);
    let host_header = format!("Host: {}{}", host, CR_LF);

    (request_line + &host_header + CR_LF + CR_LF).into_bytes()
}

///Writes `msg` to `stream` and flushes it.
pub fn write_msg<T, U>(stream: &mut T, msg: &U) -> Result<(), io::Error>
where
    T: Write,
    U: AsRef<[u8]>,
{
    stream.write_all(msg.as_ref())?;
    stream.flush()?;

    Ok(())
}

///Reads text lines from `reader` until the peer closes the connection,
///appending each line plus a `\n` to `buf`. Both `\n` and `\r\n` endings
///collapse to `\n`; a final line without a terminator still gets one, and
///bytes that are not valid UTF-8 degrade to replacement characters. When a
///read fails, `buf` keeps every whole line that arrived before the failure.
pub fn read_lines<R>(reader: &mut R, buf: &mut String) -> Result<(), io::Error>
where
    R: BufRead,
{
    loop {
        let mut line = Vec::new();

        if reader.read_until(0xA, &mut line)? == 0 {
            return Ok(());
        }

        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        buf.push_str(&String::from_utf8_lossy(&line));
        buf.push('\n');
    }
}

///Drives one request/response exchange over `stream`: sends the request
///message carrying `host`, then appends response lines to `buf` until the
///peer closes the connection.
pub fn exchange<T>(stream: &mut T, host: &str, buf: &mut String) -> Result<(), Error>
where
    T: Read + Write,
{
    write_msg(stream, &request_msg(host)).map_err(Error::Send)?;
    debug!("request sent, reading until the server closes");

    read_lines(&mut BufReader::new(stream), buf).map_err(Error::Read)
}

///Outcome of one fetch: the accumulated text, either complete or cut short.
///
///A fetch never fails outright. Whatever text arrived before a network
///failure is kept, so the `Partial` variant carries a (possibly empty) buffer
///next to the failure itself and the caller decides what to do with both.
#[derive(Debug)]
pub enum Page {
    ///The server closed the connection normally; all of its text is here.
    Complete(String),
    ///The conversation broke down; `text` holds the lines read before `reason`.
    Partial { text: String, reason: Error },
}

impl Page {
    ///Returns the accumulated text, however much of it arrived.
    pub fn text(&self) -> &str {
        match self {
            Page::Complete(text) => text,
            Page::Partial { text, .. } => text,
        }
    }

    ///Returns the failure that cut the transfer short, if there was one.
    pub fn reason(&self) -> Option<&Error> {
        match self {
            Page::Complete(_) => None,
            Page::Partial { reason, .. } => Some(reason),
        }
    }

    ///Checks if the server closed the connection without a failure.
    pub fn is_complete(&self) -> bool {
        matches!(self, Page::Complete(_))
    }

    ///Consumes this `Page`, keeping only the text.
    pub fn into_text(self) -> String {
        match self {
            Page::Complete(text) => text,
            Page::Partial { text, .. } => text,
        }
    }
}

///Fetches one page over plain TCP and keeps the result on disk.
///
///# Example
///```no_run
///use page_fetch::{fetch::PageFetcher, target::FetchTarget};
///
///let target = FetchTarget::new("localhost", 81, "wp-sandbox.html");
///let page = PageFetcher::new(target).run().unwrap();
///
///println!("kept {} bytes", page.text().len());
///```
#[derive(Clone, Debug, PartialEq)]
pub struct PageFetcher {
    target: FetchTarget,
}

impl PageFetcher {
    ///Creates new `PageFetcher` for a target.
    pub fn new(target: FetchTarget) -> PageFetcher {
        PageFetcher { target }
    }

    ///Returns the configured target.
    pub fn target(&self) -> &FetchTarget {
        &self.target
    }

    ///Fetches a page from `host`:`port`.
    ///
    ///Connects, sends the request and reads text lines until the peer closes
    ///the connection. The `Host` header always carries the configured
    ///target's host, even when `host` names something else. Network failures
    ///are not propagated: the returned `Page` holds whatever text arrived
    ///together with the failure.
    pub fn fetch(&self, host: &str, port: u16) -> Page {
        collect(host, port, self.target.host())
    }

    ///Fetches the configured page and keeps it in the configured output file.
    ///
    ///Whatever text arrived is written, even when the fetch was cut short;
    ///the returned `Page` still carries the swallowed failure. Only a failure
    ///to write the file itself comes back as `Err`.
    pub fn run(&self) -> Result<Page, Error> {
        let page = self.fetch(self.target.host(), self.target.port());
        save(page.text(), self.target.output())?;

        Ok(page)
    }
}

///Creates and sends GET request to `host`:`port`. Returns the fetched page.
///
///The connection target and the `Host` header share the same value here;
///build a [`PageFetcher`] to keep them apart.
pub fn get<T: AsRef<str>>(host: T, port: u16) -> Page {
    let host = host.as_ref();

    collect(host, port, host)
}

///Creates or truncates the file at `path` and writes `text` to it in one
///pass. Unlike a fetch, a failure here is returned to the caller.
pub fn save<T, P>(text: T, path: P) -> Result<(), Error>
where
    T: AsRef<str>,
    P: AsRef<Path>,
{
    let text = text.as_ref();
    let path = path.as_ref();

    let mut file = File::create(path).map_err(Error::Save)?;
    file.write_all(text.as_bytes()).map_err(Error::Save)?;
    debug!("kept {} bytes in {}", text.len(), path.display());

    Ok(())
}

//Runs one fetch and folds any failure into the returned page. The `Host`
//header value may differ from the host the connection goes to.
fn collect(connect_host: &str, port: u16, header_host: &str) -> Page {
    let mut text = String::new();

    match try_fetch(connect_host, port, header_host, &mut text) {
        Ok(()) => Page::Complete(text),
        Err(reason) => {
            debug!("fetch from {}:{} cut short: {}", connect_host, port, reason);
            Page::Partial { text, reason }
        }
    }
}

//The socket lives only within this call and is dropped on every path.
fn try_fetch(
    connect_host: &str,
    port: u16,
    header_host: &str,
    buf: &mut String,
) -> Result<(), Error> {
    let mut stream = TcpStream::connect((connect_host, port)).map_err(Error::Connect)?;
    debug!("connected to {}:{}", connect_host, port);

    exchange(&mut stream, header_host, buf)
}
