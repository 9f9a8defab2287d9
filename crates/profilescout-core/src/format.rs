/// Compact counter for stars, followers and friends
///
/// Anything above 999 becomes thousands with one decimal: `1200 -> "1.2k"`.
pub fn format_count(count: u32) -> String {
    if count > 999 {
        // Halves round up: 1250 -> 1.3k
        let tenths = (u64::from(count) + 50) / 100;
        format!("{}.{}k", tenths / 10, tenths % 10)
    } else {
        count.to_string()
    }
}
