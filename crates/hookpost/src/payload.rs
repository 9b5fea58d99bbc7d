//! Builds the webhook request body: plain JSON for a bare message, or a
//! two-part multipart/form-data body when a file rides along.

use serde_json::json;

use crate::input::Attachment;

/// Fixed multipart boundary. Discord only requires that it not occur in the
/// payload, so a constant token keeps the body layout deterministic.
const BOUNDARY: &str = "----hookpostboundary";

#[derive(Debug, Clone)]
pub struct Payload {
    pub body: Vec<u8>,
    pub content_type: String,
}

pub fn build_payload(message: &str, attachment: Option<&Attachment>) -> Payload {
    let payload_json = json!({ "content": message }).to_string();

    let Some(attachment) = attachment else {
        return Payload {
            body: payload_json.into_bytes(),
            content_type: "application/json".to_string(),
        };
    };

    let mut body = Vec::with_capacity(attachment.bytes.len() + payload_json.len() + 256);
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"payload_json\"\r\n\
             Content-Type: application/json\r\n\r\n\
             {payload_json}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\
             Content-Type: {}\r\n\r\n",
            attachment.file_name, attachment.content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(&attachment.bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Payload {
        body,
        content_type: format!("multipart/form-data; boundary={BOUNDARY}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: &str, content_type: &str, bytes: &[u8]) -> Attachment {
        Attachment {
            file_name: name.to_string(),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    /// Split a multipart body into (headers, value) pairs the way a receiver
    /// would: parts delimited by the boundary, header block ended by a blank
    /// line, value terminated by CRLF before the next delimiter.
    fn parse_multipart(body: &[u8], boundary: &str) -> Vec<(String, Vec<u8>)> {
        let delimiter = format!("--{boundary}\r\n").into_bytes();
        let terminator = format!("--{boundary}--\r\n").into_bytes();

        let mut parts = Vec::new();
        let mut rest = body;
        loop {
            assert!(rest.starts_with(&delimiter) || rest.starts_with(&terminator));
            if rest.starts_with(&terminator) {
                assert_eq!(rest.len(), terminator.len(), "trailing bytes after terminator");
                break;
            }
            rest = &rest[delimiter.len()..];

            let header_end = rest
                .windows(4)
                .position(|w| w == b"\r\n\r\n")
                .expect("blank line after part headers");
            let headers = String::from_utf8(rest[..header_end].to_vec()).unwrap();
            rest = &rest[header_end + 4..];

            // Value runs until CRLF followed by the next boundary marker.
            let mut end = None;
            for i in 0..rest.len().saturating_sub(1) {
                if &rest[i..i + 2] == b"\r\n"
                    && (rest[i + 2..].starts_with(&delimiter) || rest[i + 2..].starts_with(&terminator))
                {
                    end = Some(i);
                    break;
                }
            }
            let end = end.expect("CRLF before next boundary");
            parts.push((headers, rest[..end].to_vec()));
            rest = &rest[end + 2..];
        }
        parts
    }

    #[test]
    fn bare_message_is_plain_json() {
        let payload = build_payload("hello there", None);
        assert_eq!(payload.content_type, "application/json");

        let parsed: serde_json::Value = serde_json::from_slice(&payload.body).unwrap();
        assert_eq!(parsed, serde_json::json!({"content": "hello there"}));
    }

    #[test]
    fn message_with_quotes_survives_json_encoding() {
        let message = r#"she said "hi" \ bye"#;
        let payload = build_payload(message, None);
        let parsed: serde_json::Value = serde_json::from_slice(&payload.body).unwrap();
        assert_eq!(parsed["content"], message);
    }

    #[test]
    fn multipart_has_exactly_two_labeled_parts_in_order() {
        let file = attachment("pic.png", "image/png", b"\x89PNG\r\n\x1a\nrest");
        let payload = build_payload("caption", Some(&file));
        assert_eq!(
            payload.content_type,
            format!("multipart/form-data; boundary={BOUNDARY}")
        );

        let parts = parse_multipart(&payload.body, BOUNDARY);
        assert_eq!(parts.len(), 2);

        let (json_headers, json_value) = &parts[0];
        assert!(json_headers.contains("Content-Disposition: form-data; name=\"payload_json\""));
        assert!(json_headers.contains("Content-Type: application/json"));
        let parsed: serde_json::Value = serde_json::from_slice(json_value).unwrap();
        assert_eq!(parsed, serde_json::json!({"content": "caption"}));

        let (file_headers, file_value) = &parts[1];
        assert!(file_headers
            .contains("Content-Disposition: form-data; name=\"file\"; filename=\"pic.png\""));
        assert!(file_headers.contains("Content-Type: image/png"));
        assert_eq!(file_value, b"\x89PNG\r\n\x1a\nrest");
    }

    #[test]
    fn binary_content_round_trips_byte_for_byte() {
        // Bytes that resemble CRLF and JSON must not confuse the framing.
        let bytes: Vec<u8> = (0u8..=255).chain(*b"\r\n{\"content\":1}\r\n").collect();
        let file = attachment("blob.bin", "application/octet-stream", &bytes);
        let payload = build_payload("m", Some(&file));

        let parts = parse_multipart(&payload.body, BOUNDARY);
        assert_eq!(parts[1].1, bytes);
    }

    #[test]
    fn multipart_uses_crlf_terminated_lines() {
        let file = attachment("a.txt", "text/plain", b"x");
        let payload = build_payload("m", Some(&file));

        let text = String::from_utf8_lossy(&payload.body);
        assert!(text.starts_with(&format!("--{BOUNDARY}\r\n")));
        assert!(text.ends_with(&format!("\r\n--{BOUNDARY}--\r\n")));
        // No bare LF line endings anywhere in the header framing.
        for line in text.split("\r\n") {
            assert!(!line.contains('\n'));
        }
    }
}
