use assert_cmd::Command;
use predicates::prelude::*;

fn bitsyntax_cmd() -> Command {
	Command::cargo_bin("bitsyntax").unwrap()
}

#[test]
fn test_help_command() {
	bitsyntax_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("bit-syntax"));
}

#[test]
fn test_extract_big_endian() {
	bitsyntax_cmd()
		.args(["extract", "DEADBEEF", "--offset", "8", "--size", "16"])
		.assert()
		.success()
		.stdout(predicate::str::diff("44478\n"));
}

#[test]
fn test_extract_little_signed() {
	bitsyntax_cmd()
		.args(["extract", "FEFF", "-s", "16", "--little", "--signed"])
		.assert()
		.success()
		.stdout(predicate::str::diff("-2\n"));
}

#[test]
fn test_extract_with_vm_flags() {
	// 0x6 = little endian | signed
	bitsyntax_cmd()
		.args(["extract", "FF7F", "-s", "16", "--flags", "0x6"])
		.assert()
		.success()
		.stdout(predicate::str::diff("32767\n"));
}

#[test]
fn test_extract_unaligned_fails() {
	bitsyntax_cmd()
		.args(["extract", "FFFF", "-o", "4", "-s", "8"])
		.assert()
		.failure()
		.stdout(predicate::str::contains("not byte aligned"));
}

#[test]
fn test_extract_negative_int64_fails() {
	bitsyntax_cmd()
		.args(["extract", "8000000000000000", "-s", "64", "--signed"])
		.assert()
		.failure()
		.stdout(predicate::str::contains("sign bit"));

	bitsyntax_cmd()
		.args(["extract", "8000000000000000", "-s", "64"])
		.assert()
		.success()
		.stdout(predicate::str::diff("9223372036854775808\n"));
}

#[test]
fn test_extract_out_of_bounds_fails() {
	bitsyntax_cmd()
		.args(["extract", "DEAD", "-o", "8", "-s", "16"])
		.assert()
		.failure()
		.stdout(predicate::str::contains("exceed"));
}

#[test]
fn test_match_segments() {
	bitsyntax_cmd()
		.args(["match", "0005FF01020304AA", "16", "8/signed", "32/little", "skip:4"])
		.assert()
		.success()
		.stdout(predicate::str::diff("5\n-1\n67305985\nrest: 4 bits\n"));
}

#[test]
fn test_match_stops_at_first_failure() {
	bitsyntax_cmd()
		.args(["match", "0102", "8", "16"])
		.assert()
		.failure()
		.stdout(predicate::str::starts_with("1\nno match: segment 1"));
}

#[test]
fn test_bad_input_is_rejected() {
	bitsyntax_cmd()
		.args(["extract", "XYZ1", "-s", "8"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("invalid hex byte"));

	bitsyntax_cmd()
		.args(["match", "00", "8/sideways"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("unknown type specifier"));
}
