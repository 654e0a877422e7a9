//!Minimal raw-socket page fetcher.
//!Opens a plain TCP connection, sends a fixed GET request and keeps whatever
//!text the server returns, line by line, until the peer hangs up. The result
//!can be written to a local file as-is.
//!
//!## Example
//!Fetch a page from a local server
//!```no_run
//!use page_fetch::fetch;
//!
//!fn main() {
//!    let page = fetch::get("localhost", 81);
//!
//!    println!("kept {} bytes", page.text().len());
//!}
//!```
pub mod error;
pub mod fetch;
pub mod target;
