use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{bail, Context as _};
use bitsyntax::{try_extract_integer, Binary, BitstringFlags, Endianness, MatchState, Signedness};
use clap::{Parser, Subcommand};
use tracing::*;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Debug, Parser)]
#[command(version, about = "Decode integer fields out of binaries the way bit-syntax patterns do")]
struct CliArgs {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Extract a single integer field
	Extract {
		/// Binary contents as hex, e.g. DEADBEEF
		#[arg(value_parser = parse_hex_binary)]
		binary: Binary,
		/// Offset of the field in bits
		#[arg(short, long, default_value_t = 0, value_parser = parse_dec_or_hex)]
		offset: u64,
		/// Width of the field in bits
		#[arg(short, long, value_parser = parse_dec_or_hex_u32)]
		size: u32,
		#[arg(short, long)]
		little: bool,
		#[arg(long)]
		signed: bool,
		/// Raw VM flag word, combined with --little and --signed
		#[arg(long, value_parser = parse_dec_or_hex_u32)]
		flags: Option<u32>,
	},
	/// Match a sequence of segments against a binary, front to back
	Match {
		#[arg(value_parser = parse_hex_binary)]
		binary: Binary,
		/// SIZE[/SPEC[-SPEC...]] with SPEC one of big, little, signed, unsigned; or skip:SIZE
		#[arg(required = true)]
		segments: Vec<Segment>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
	Integer { size: u32, flags: BitstringFlags },
	Skip(u64),
}

impl FromStr for Segment {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Some(size) = s.strip_prefix("skip:") {
			let size = parse_dec_or_hex(size).with_context(|| format!("bad skip size in segment {s:?}"))?;
			return Ok(Segment::Skip(size));
		}

		let (size, specs) = s.split_once('/').unwrap_or((s, ""));
		let size = parse_dec_or_hex_u32(size).with_context(|| format!("bad size in segment {s:?}"))?;

		let mut endianness = Endianness::default();
		let mut signedness = Signedness::default();
		for spec in specs.split('-').filter(|spec| !spec.is_empty()) {
			match spec {
				"big" => endianness = Endianness::Big,
				"little" => endianness = Endianness::Little,
				"signed" => signedness = Signedness::Signed,
				"unsigned" => signedness = Signedness::Unsigned,
				other => bail!("unknown type specifier {other:?} in segment {s:?}"),
			}
		}

		Ok(Segment::Integer {
			size,
			flags: BitstringFlags::new(endianness, signedness),
		})
	}
}

fn parse_dec_or_hex(s: &str) -> Result<u64, <u64 as FromStr>::Err> {
	if let Some(hex) = s.strip_prefix("0x") {
		u64::from_str_radix(hex, 16)
	} else {
		s.parse()
	}
}

fn parse_dec_or_hex_u32(s: &str) -> anyhow::Result<u32> {
	let val = parse_dec_or_hex(s)?;
	u32::try_from(val).with_context(|| format!("{val} does not fit in 32 bits"))
}

fn parse_hex_binary(s: &str) -> anyhow::Result<Binary> {
	let digits: Vec<u8> = s
		.strip_prefix("0x")
		.unwrap_or(s)
		.bytes()
		.filter(|b| !matches!(b, b'_' | b' ' | b':'))
		.collect();
	if digits.len() % 2 != 0 {
		bail!("hex binary has an odd number of digits");
	}

	let bytes = digits
		.chunks_exact(2)
		.map(|pair| {
			let pair = std::str::from_utf8(pair).context("hex binary is not ascii")?;
			u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex byte {pair:?}"))
		})
		.collect::<anyhow::Result<Vec<u8>>>()?;
	Ok(Binary::from(bytes))
}

fn main() -> ExitCode {
	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
		.with(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let cli = CliArgs::parse();

	match cli.command {
		Commands::Extract {
			binary,
			offset,
			size,
			little,
			signed,
			flags,
		} => {
			let mut bs_flags = BitstringFlags::from_bits(flags.unwrap_or(0));
			if little {
				bs_flags.insert(BitstringFlags::LITTLE_ENDIAN_INTEGER);
			}
			if signed {
				bs_flags.insert(BitstringFlags::SIGNED_INTEGER);
			}
			run_extract(&binary, offset, size, bs_flags)
		}
		Commands::Match { binary, segments } => run_match(&binary, &segments),
	}
}

fn run_extract(binary: &Binary, offset: u64, size: u32, flags: BitstringFlags) -> ExitCode {
	debug!("extracting {size} bits @ {offset} from {binary:?} with {flags:?}");
	match try_extract_integer(binary, offset, size, flags) {
		Ok(val) => {
			println!("{val}");
			ExitCode::SUCCESS
		}
		Err(err) => {
			println!("no match: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run_match(binary: &Binary, segments: &[Segment]) -> ExitCode {
	let mut ms = MatchState::new(binary);
	for (idx, segment) in segments.iter().enumerate() {
		let matched = match *segment {
			Segment::Integer { size, flags } => ms.get_integer(size, flags).map(|val| println!("{val}")),
			Segment::Skip(count) => ms.skip_bits(count),
		};
		if matched.is_none() {
			println!("no match: segment {idx} ({segment:?}) at bit {}", ms.offset());
			return ExitCode::FAILURE;
		}
	}

	println!("rest: {} bits", ms.remaining_bits());
	ExitCode::SUCCESS
}
