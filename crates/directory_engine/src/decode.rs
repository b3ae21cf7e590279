use chardetng::EncodingDetector;
use directory_core::MalformedResponseError;
use encoding_rs::Encoding;

/// Decode a response body to text: BOM -> Content-Type charset -> UTF-8 -> chardetng guess.
pub fn decode_body(
    bytes: &[u8],
    content_type: Option<&str>,
) -> Result<String, MalformedResponseError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, encoding);
        }
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        })
        .next()
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<String, MalformedResponseError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(MalformedResponseError::Undecodable {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}
