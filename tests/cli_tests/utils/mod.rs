use std::{
    io::Write,
    process::{Output, Stdio},
};

#[derive(Debug)]
/// A wrapper around the uasniff cli binary.
pub(crate) struct UasniffCli;

impl UasniffCli {
    /// Run any uasniff cmd, with the given input written to its stdin.
    pub(crate) fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
        let mut child = escargot::CargoBuild::new()
            .package("uasniff-cli")
            .bin("uasniff")
            .target_dir("./target/")
            .run()
            .unwrap()
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .args(args)
            .spawn()
            .unwrap();

        let mut input = child.stdin.take().unwrap();
        input.write_all(stdin.as_bytes()).unwrap();
        drop(input);

        child.wait_with_output().unwrap()
    }

    /// Run any uasniff cmd which is expected to succeed, returning its stdout.
    pub(crate) fn run(args: &[&str]) -> String {
        let output = Self::run_with_stdin(args, "");
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}
