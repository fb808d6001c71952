use std::ffi::OsString;
use std::process::{Command, Output};

fn modescale<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    Command::new(env!("CARGO_BIN_EXE_modescale"))
        .args(args.into_iter().map(Into::into))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_default_scale() {
    let out = modescale(Vec::<String>::new());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"C D E F G A B\n");
}

#[test]
fn test_root_and_mode() {
    let out = modescale(["C", "6"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"C D Eb F G Ab Bb\n");

    let out = modescale(["A", "6"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"A B C D E F G\n");
}

#[test]
fn test_invalid_input_exits_with_one() {
    for args in [vec!["H"], vec!["C#b"], vec!["C", "8"], vec!["C", "0"], vec!["C", "x"]] {
        let out = modescale(args.clone());
        assert_eq!(out.status.code(), Some(1), "args {:?}", args);
        assert_eq!(out.stdout, b"Invalid input\n", "args {:?}", args);
    }
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument() {
    use std::os::unix::ffi::OsStringExt;

    let out = modescale([OsString::from_vec(vec![0x43, 0xff])]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stdout, b"Invalid input\n");

    let out = modescale([OsString::from("C"), OsString::from_vec(vec![0x31, 0xff])]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(out.stdout, b"Invalid input\n");
}
