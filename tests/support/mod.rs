#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::Once;
use std::thread::{self, JoinHandle};

static LOCAL_ONLY: Once = Once::new();

/// Keeps reqwest from routing loopback requests through a proxy taken from the environment.
pub fn bypass_proxies() {
    LOCAL_ONLY.call_once(|| {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        std::env::set_var("no_proxy", "127.0.0.1,localhost");
    });
}

/// Answers one canned response per incoming connection, in order, then stops.
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl MockServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        bypass_proxies();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (stream, _) = listener.accept().unwrap();

                let mut head = String::new();
                let mut reader = BufReader::new(&stream);
                loop {
                    let mut line = String::new();
                    let read = reader.read_line(&mut line).unwrap();
                    if read == 0 || line == "\r\n" {
                        break;
                    }
                    head.push_str(&line);
                }
                requests.push(head);

                let response = format!(
                    "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                (&stream).write_all(response.as_bytes()).unwrap();
                (&stream).flush().unwrap();
            }
            requests
        });

        Self { base_url, handle }
    }

    pub fn single(status: u16, body: impl Into<String>) -> Self {
        Self::start(vec![(status, body.into())])
    }

    /// Request heads (request line plus headers) in arrival order.
    pub fn requests(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

/// An address nothing listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub const SEARCH_PAYLOAD: &str = r#"{"results":[{"fsq_place_id":"abc123","name":"Test Restaurant","distance":120,"location":{"address":"1 Main St","locality":"Atlanta","region":"GA"},"geocodes":{"main":{"latitude":33.7,"longitude":-84.3}},"categories":[{"name":"Ramen"}]},{"fsq_id":"def456","name":"Second Spot","categories":[]},{"name":"No Id Diner"}]}"#;

pub const DETAIL_PAYLOAD: &str = r#"{"fsq_place_id":"abc123","name":"Test Restaurant","rating":8.6,"price":2,"hours":{"open_now":true,"display":"Mon-Sun 11:00-21:00"},"location":{"address":"1 Main St","locality":"Atlanta","region":"GA"},"geocodes":{"main":{"latitude":33.7,"longitude":-84.3}},"categories":[{"name":"Ramen"}],"tel":"(404) 555-0100"}"#;

pub const SECOND_DETAIL_PAYLOAD: &str = r#"{"fsq_place_id":"def456","name":"Second Spot","price":7,"hours":"unknown"}"#;
