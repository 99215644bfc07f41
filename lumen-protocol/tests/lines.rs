//! Line assembly over arbitrary byte streams

use lumen_protocol::{LineAssembler, LineError, Status, MAX_LINE_LEN};
use proptest::prelude::*;

fn collect(assembler: &mut LineAssembler, bytes: &[u8]) -> Vec<Result<String, LineError>> {
    bytes
        .iter()
        .filter_map(|&b| assembler.feed(b).transpose())
        .map(|r| r.map(|line| line.as_str().to_owned()))
        .collect()
}

proptest! {
    #[test]
    fn printable_lines_come_back_trimmed(
        lines in prop::collection::vec("[ -~]{0,100}", 1..8),
        crlf in any::<bool>(),
    ) {
        let ending = if crlf { "\r\n" } else { "\n" };
        let stream: String = lines.iter().map(|l| format!("{l}{ending}")).collect();
        let mut assembler = LineAssembler::new();
        let got = collect(&mut assembler, stream.as_bytes());

        let want: Vec<Result<String, LineError>> = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(|l| Ok(l.to_owned()))
            .collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn overlong_lines_never_leak(extra in 1usize..64, tail in "[a-z]{1,20}") {
        let mut stream = "x".repeat(MAX_LINE_LEN + extra);
        stream.push('\n');
        stream.push_str(&tail);
        stream.push('\n');
        let mut assembler = LineAssembler::new();
        let got = collect(&mut assembler, stream.as_bytes());
        prop_assert_eq!(got, vec![Err(LineError::Overflow), Ok(tail)]);
    }

    #[test]
    fn any_accepted_line_can_be_echoed(text in "[ -~]{1,128}") {
        for status in [Status::DataReceived(&text), Status::Busy(&text), Status::WrongMode(&text)] {
            let line = status.encode().unwrap();
            prop_assert!(line.ends_with("\r\n"));
            prop_assert!(line.contains(text.as_str()));
        }
    }
}
