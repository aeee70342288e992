use std::path::{Path, PathBuf};

/// Suffixes recognized as source or header files.
pub const SOURCE_SUFFIXES: [&str; 6] = [".h", ".hpp", ".c", ".cc", ".cxx", ".cpp"];

/// The one option whose following argument is an operand (the output path).
const OUTPUT_FLAG: &str = "-o";

/// What one argument vector compiles, plus its flattened form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Absolute paths of every recognized source-file operand, in argv order.
    pub files: Vec<PathBuf>,
    /// The full argument vector joined with single spaces, unmodified.
    pub command: String,
}

pub fn is_source_file(name: &str) -> bool {
    SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Extract the source-file operands of an argument vector.
///
/// Scans `argv[1..]` left to right. Non-option arguments with a recognized
/// suffix are resolved against `cwd` and collected; `-o` consumes its
/// following argument unconditionally so an output path can never be taken
/// for a source file. No other option consumes a follower.
pub fn classify(argv: &[String], cwd: &Path) -> Classification {
    let mut files = Vec::new();

    let mut args = argv.iter().skip(1);
    while let Some(arg) = args.next() {
        if arg.starts_with('-') {
            if arg == OUTPUT_FLAG {
                args.next();
            }
            continue;
        }

        if is_source_file(arg) {
            files.push(absolutize(arg, cwd));
        }
    }

    Classification {
        files,
        command: argv.join(" "),
    }
}

fn absolutize(operand: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(operand);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
