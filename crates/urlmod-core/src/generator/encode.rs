use url::form_urlencoded;

/// Returns the value as it should be placed into a query map. With `double_encode` the
/// value is form-urlencoded here, and the serializer encodes it a second time.
pub fn prepare_value(value: &str, double_encode: bool) -> String {
    if double_encode {
        form_urlencoded::byte_serialize(value.as_bytes()).collect()
    } else {
        value.to_string()
    }
}
