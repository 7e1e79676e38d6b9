//! Tests for sending notifications over loopback UDP.

use std::io::ErrorKind;
use std::net::UdpSocket;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use xsoverlay_notifier::{
    Message, MessageType, Notifier, NotifierError, NotifierState, audio, icon,
};

/// Bind a stand-in overlay on an OS-assigned loopback port.
fn overlay(read_timeout: Duration) -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket.set_read_timeout(Some(read_timeout)).unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, port)
}

fn recv_json(socket: &UdpSocket) -> serde_json::Value {
    let mut buffer = vec![0u8; 65536];
    let n = socket.recv(&mut buffer).unwrap();
    serde_json::from_slice(&buffer[..n]).unwrap()
}

fn assert_nothing_received(socket: &UdpSocket) {
    let mut buffer = vec![0u8; 65536];
    match socket.recv(&mut buffer) {
        Ok(n) => panic!("unexpected datagram of {n} bytes"),
        Err(e) => assert!(
            matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut),
            "unexpected error: {e}"
        ),
    }
}

fn example_message() -> Message {
    Message::new("Example Notification!")
        .content("2024-01-01 00:00:00")
        .source_app("XSOverlay_Example_UDP")
        .audio_path(audio::DEFAULT)
}

#[test]
fn test_send_without_listener() {
    let notifier = Notifier::with_port(42069).unwrap();
    notifier.send(example_message());
    notifier.send(example_message());
    notifier.close();

    assert_eq!(notifier.state(), NotifierState::Closed);
}

#[test]
fn test_send_delivers_normalized_message() {
    let (overlay, port) = overlay(Duration::from_secs(2));
    let notifier = Notifier::with_port(port).unwrap();

    let message = example_message().timeout(-1.0).opacity(0.0).height(0.5);
    notifier.send(message.clone());

    let value = recv_json(&overlay);
    let received: Message = serde_json::from_value(value).unwrap();
    assert_eq!(received, message.normalized());
    assert_eq!(received.timeout, 3.0);
    assert_eq!(received.opacity, 1.0);
    assert_eq!(received.height, 120.0);
    assert_eq!(received.volume, 0.7);
    assert_eq!(received.icon, icon::DEFAULT);

    notifier.close();
}

#[test]
fn test_wire_format_fields_and_types() {
    let (overlay, port) = overlay(Duration::from_secs(2));
    let notifier = Notifier::with_port(port).unwrap();

    notifier.send(Message::default());

    let value = recv_json(&overlay);
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 12);

    for key in ["messageType", "index"] {
        assert!(object[key].is_i64(), "{key} should be an integer");
    }
    for key in ["timeout", "height", "opacity", "volume"] {
        assert!(object[key].is_number(), "{key} should be a number");
    }
    for key in ["audioPath", "title", "content", "icon", "sourceApp"] {
        assert!(object[key].is_string(), "{key} should be a string");
    }
    assert!(object["useBase64Icon"].is_boolean());

    assert_eq!(object["messageType"], 1);
    assert_eq!(object["timeout"], 3.0);
    assert_eq!(object["icon"], "default");

    notifier.close();
}

#[test]
fn test_one_datagram_per_message() {
    let (overlay, port) = overlay(Duration::from_secs(2));
    let notifier = Notifier::with_port(port).unwrap();

    for i in 0..3 {
        notifier.send(Message::new(format!("message {i}")));
    }

    let mut titles: Vec<String> = (0..3)
        .map(|_| recv_json(&overlay)["title"].as_str().unwrap().to_owned())
        .collect();
    titles.sort();
    assert_eq!(titles, ["message 0", "message 1", "message 2"]);

    notifier.close();
}

#[test]
fn test_media_player_message() {
    let (overlay, port) = overlay(Duration::from_secs(2));
    let notifier = Notifier::with_port(port).unwrap();

    notifier.send(Message::media_player(-5).title("Now playing"));

    let received: Message = serde_json::from_value(recv_json(&overlay)).unwrap();
    assert_eq!(received.message_type, MessageType::MediaPlayerInformation);
    assert_eq!(received.index, -5);

    notifier.close();
}

#[test]
fn test_send_after_close_is_noop() {
    let (overlay, port) = overlay(Duration::from_millis(200));
    let notifier = Notifier::with_port(port).unwrap();

    notifier.close();
    notifier.send(example_message());

    assert!(notifier.is_closed());
    assert_nothing_received(&overlay);
}

#[test]
fn test_close_twice() {
    let notifier = Notifier::with_port(42069).unwrap();
    notifier.close();
    notifier.close();

    assert!(notifier.is_closed());
    assert!(notifier.local_addr().is_none());
}

#[test]
fn test_oversized_message_is_reported_not_sent() {
    let (overlay, port) = overlay(Duration::from_millis(200));

    let dropped = Arc::new(AtomicUsize::new(0));
    let dropped_clone = dropped.clone();
    let notifier = Notifier::with_port(port)
        .unwrap()
        .with_diagnostics(move |error| {
            if let NotifierError::Oversized { len, max } = error {
                assert!(len > max);
                dropped_clone.fetch_add(1, Ordering::SeqCst);
            }
        });

    notifier.send(Message::new("huge icon").icon_base64(vec![0xAB; 70_000]));

    assert_eq!(dropped.load(Ordering::SeqCst), 1);
    assert_nothing_received(&overlay);

    notifier.close();
}

#[test]
fn test_concurrent_notifiers() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 5;

    let (overlay_a, port_a) = overlay(Duration::from_secs(2));
    let (overlay_b, port_b) = overlay(Duration::from_secs(2));

    let (notifier_a, notifier_b) = thread::scope(|s| {
        let a = s.spawn(|| Notifier::with_port(port_a).unwrap());
        let b = s.spawn(|| Notifier::with_port(port_b).unwrap());
        (Arc::new(a.join().unwrap()), Arc::new(b.join().unwrap()))
    });

    let handles: Vec<_> = (0..THREADS)
        .flat_map(|t| {
            [("a", notifier_a.clone()), ("b", notifier_b.clone())]
                .into_iter()
                .map(move |(name, notifier)| {
                    thread::spawn(move || {
                        for i in 0..PER_THREAD {
                            notifier.send(
                                Message::new(format!("{t}-{i}")).source_app(name),
                            );
                        }
                    })
                })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for (overlay, name) in [(&overlay_a, "a"), (&overlay_b, "b")] {
        for _ in 0..THREADS * PER_THREAD {
            assert_eq!(recv_json(overlay)["sourceApp"], name);
        }
    }

    notifier_a.close();
    notifier_b.close();
}

#[test]
fn test_send_races_with_close() {
    let (_overlay, port) = overlay(Duration::from_millis(200));
    let notifier = Arc::new(Notifier::with_port(port).unwrap());

    let senders: Vec<_> = (0..4)
        .map(|t| {
            let notifier = notifier.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    notifier.send(Message::new(format!("{t}-{i}")));
                }
            })
        })
        .collect();

    let closer = {
        let notifier = notifier.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(1));
            notifier.close();
        })
    };

    for handle in senders {
        handle.join().unwrap();
    }
    closer.join().unwrap();

    assert!(notifier.is_closed());
}
