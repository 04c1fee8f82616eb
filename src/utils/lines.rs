//! Line splitting shared by the PDF scan and the indexer output relay

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read up to the next `\n` and return the lines it holds.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, so one read can yield several
/// lines. Bytes that are not valid UTF-8 are replaced rather than rejected.
/// Returns `None` at end of input.
pub async fn next_lines<R>(reader: &mut R) -> std::io::Result<Option<Vec<String>>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    let chunk = String::from_utf8_lossy(&buf);
    Ok(Some(chunk.split('\r').map(str::to_string).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn all_lines(mut data: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(group) = next_lines(&mut data).await.unwrap() {
            lines.extend(group);
        }
        lines
    }

    #[tokio::test]
    async fn test_terminators() {
        assert_eq!(all_lines(b"first\r\nsecond\nthird").await, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_lone_carriage_return_ends_a_line() {
        assert_eq!(
            all_lines(b"prog 10%\rprog 50%\rdone\n").await,
            vec!["prog 10%", "prog 50%", "done"]
        );
        assert_eq!(all_lines(b"a\r\rb\n").await, vec!["a", "", "b"]);
    }

    #[tokio::test]
    async fn test_trailing_carriage_return_at_eof() {
        assert_eq!(all_lines(b"last\r").await, vec!["last"]);
    }

    #[tokio::test]
    async fn test_blank_lines_are_kept() {
        assert_eq!(all_lines(b"one\n\ntwo\n").await, vec!["one", "", "two"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        assert_eq!(all_lines(b"ok \xff\n").await, vec!["ok \u{FFFD}"]);
    }
}
