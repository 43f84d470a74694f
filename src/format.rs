use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
const TAB_WIDTH: usize = 4;
/// Size column: kilobytes with two decimals.
pub fn format_size(size: u64) -> String {
    format!("{:.2} KB", size as f64 / 1024.0)
}
pub fn format_time(time: Option<SystemTime>) -> String {
    match time {
        Some(time) => {
            let local: DateTime<Local> = time.into();
            local.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        None => String::new(),
    }
}
/// Where a marked entry lands when pasted into `dir`: same base name.
pub fn paste_destination(marked: &Path, dir: &Path) -> Option<PathBuf> {
    marked.file_name().map(|name| dir.join(name))
}
/// Makes a line of file content safe to paint: tabs become spaces and other
/// control characters become U+FFFD.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '\t' => {
                let pad = TAB_WIDTH - (out.chars().count() % TAB_WIDTH);
                out.extend(std::iter::repeat(' ').take(pad));
            }
            c if c.is_control() => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}
/// Pads or truncates `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{:<width$}", text, width = width)
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('~');
        cut
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
    }
    #[test]
    fn test_paste_destination_keeps_base_name() {
        let dst = paste_destination(Path::new("/a/x.txt"), Path::new("/b"));
        assert_eq!(dst, Some(PathBuf::from("/b/x.txt")));
        assert_eq!(paste_destination(Path::new("/"), Path::new("/b")), None);
    }
    #[test]
    fn test_sanitize_line() {
        assert_eq!(sanitize_line("a\tb"), "a   b");
        assert_eq!(sanitize_line("x\u{1b}[2J"), "x\u{fffd}[2J");
    }
    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc~");
    }
}
