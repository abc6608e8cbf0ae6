//! Remote endpoints and URL helpers

/// Production Universalis host
pub const DEFAULT_UNIVERSALIS_URL: &str = "https://universalis.app";

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("ffxiv-market-tools/", env!("CARGO_PKG_VERSION"));

/// Percent-encodes a single URL path segment.
///
/// Every reserved character is escaped, including `/` and `,`, so a market
/// name or a joined ID list can never split or extend the path.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Public market board page for an item
pub fn market_page_url(item_id: u32) -> String {
    format!("{}/market/{}", DEFAULT_UNIVERSALIS_URL, item_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_segment_escapes_separators() {
        assert_eq!(encode_segment("1,2,3"), "1%2C2%2C3");
        assert_eq!(encode_segment("North-America"), "North-America");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn market_page_url_uses_item_id() {
        assert_eq!(market_page_url(5057), "https://universalis.app/market/5057");
    }
}
