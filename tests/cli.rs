use std::io::Write;
use std::process::{Command, Output, Stdio};

const SPLIT: &str = env!("CARGO_BIN_EXE_sss256-split");
const COMBINE: &str = env!("CARGO_BIN_EXE_sss256-combine");

fn run_tool(bin: &str, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        // the child may exit without draining stdin on argument errors
        let mut stdin = child.stdin.take().unwrap();
        let _ = stdin.write_all(input);
    }
    child.wait_with_output().unwrap()
}

#[test]
fn split_then_combine_roundtrip() {
    let secret = b"correct horse battery";
    let split = run_tool(SPLIT, &["--threshold=3", "--shares=5"], secret);
    assert_eq!(split.status.code(), Some(0));

    let lines: Vec<&[u8]> = split.stdout.split_inclusive(|&b| b == b'\n').collect();
    assert_eq!(lines.len(), 5);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.len(), 2 + 1 + 2 * secret.len() + 1);
        assert_eq!(&line[..3], format!("{:02x}-", i + 1).as_bytes());
    }

    let stderr = String::from_utf8(split.stderr).unwrap();
    assert!(stderr.contains("Splitting the secret into 5 shares with a threshold of 3."));
    assert!(stderr.contains("Random coefficients are 0x"));

    let picked = [lines[4], lines[0], lines[2]].concat();
    let combine = run_tool(COMBINE, &["--threshold=3"], &picked);
    assert_eq!(combine.status.code(), Some(0));
    assert_eq!(combine.stdout, secret);
}

#[test]
fn short_flags_are_accepted() {
    let split = run_tool(SPLIT, &["-t", "2", "-n", "2"], b"x");
    assert_eq!(split.status.code(), Some(0));
    assert_eq!(split.stdout.split(|&b| b == b'\n').count(), 3);
}

#[test]
fn help_exits_clean() {
    let out = run_tool(SPLIT, &["--help"], b"");
    assert_eq!(out.status.code(), Some(0));
    assert!(!out.stdout.is_empty());
}

#[test]
fn unknown_argument_is_code_1() {
    let out = run_tool(SPLIT, &["--threshold=3", "--shares=5", "--bogus"], b"");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn out_of_range_threshold_is_code_2() {
    let out = run_tool(SPLIT, &["--threshold=1", "--shares=5"], b"");
    assert_eq!(out.status.code(), Some(2));
    let out = run_tool(SPLIT, &["--threshold=abc", "--shares=5"], b"");
    assert_eq!(out.status.code(), Some(2));
    let out = run_tool(SPLIT, &["--shares=5"], b"");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn threshold_above_share_count_is_code_3() {
    let out = run_tool(SPLIT, &["--threshold=5", "--shares=3"], b"");
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("The threshold must not exceed the number of shares."));
}

#[test]
fn empty_secret_is_code_4() {
    let out = run_tool(SPLIT, &["--threshold=2", "--shares=3"], b"");
    assert_eq!(out.status.code(), Some(4));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("The secret must not be empty."));
}

#[test]
fn malformed_share_input_is_code_6() {
    let out = run_tool(COMBINE, &["--threshold=2"], b"01-\n02-\n");
    assert_eq!(out.status.code(), Some(6));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(
        stderr,
        "Expected hex digit, but found control code LF (hex 0x0a) on line 1, column 4.\n"
    );
}

#[test]
fn duplicate_share_index_is_code_6() {
    let out = run_tool(COMBINE, &["--threshold=2"], b"05-00\n05-01\n");
    assert_eq!(out.status.code(), Some(6));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr, "Shares on lines 1 and 2 have the same index 0x05.\n");
}

#[test]
fn combine_ignores_input_past_the_last_share() {
    let out = run_tool(COMBINE, &["--threshold=2"], b"01-df\n02-dc\ngarbage after");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, [0xde]);
}
