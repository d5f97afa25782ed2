use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use log::info;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

// Explicit parameters for one split run. The prefix carries no default:
// output names are always "{prefix}{i}.json" and the caller must pick it.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub prefix: String,
    pub chunks: usize,
}

// What a completed run produced, for the caller's summary line.
#[derive(Debug)]
pub struct SplitReport {
    pub total_items: usize,
    pub chunk_size: usize,
    pub files: Vec<PathBuf>,
}

/// Split the input JSON array into exactly `chunks` files.
///
/// Chunk size is `ceil(total / chunks)`, so every chunk except possibly the
/// last non-empty one is full. Indices past the end of the array still get a
/// file holding `[]`; the file count never depends on the input length.
pub fn split(cfg: &SplitConfig) -> Result<SplitReport> {
    if cfg.chunks == 0 {
        bail!("Chunk count must be at least 1");
    }

    let raw = fs::read_to_string(&cfg.input)
        .with_context(|| format!("reading {}", cfg.input.display()))?;
    let json: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cfg.input.display()))?;
    let items = match json {
        Value::Array(arr) => arr,
        other => bail!(
            "{} does not hold a top-level JSON array (found {})",
            cfg.input.display(),
            type_name(&other)
        ),
    };

    let total_items = items.len();
    let chunk_size = total_items.div_ceil(cfg.chunks);
    info!("Loaded {} item(s), chunk size {}", total_items, chunk_size);

    let mut files = Vec::with_capacity(cfg.chunks);
    for i in 0..cfg.chunks {
        // Both bounds clamp so trailing indices yield empty slices
        let start = (i * chunk_size).min(total_items);
        let end = (start + chunk_size).min(total_items);
        let chunk = &items[start..end];

        let out_path = PathBuf::from(format!("{}{}.json", cfg.prefix, i));
        write_pretty(&out_path, chunk)?;

        println!(
            "Wrote chunk {} to {} ({} items)",
            i,
            out_path.display(),
            chunk.len()
        );
        files.push(out_path);
    }

    Ok(SplitReport {
        total_items,
        chunk_size,
        files,
    })
}

// The observed output format is 4-space indentation; to_string_pretty gives
// 2, so serialize through an explicit formatter. Non-ASCII stays literal.
fn write_pretty(path: &Path, chunk: &[Value]) -> Result<()> {
    let outfile =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(outfile);
    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut writer, formatter);
        chunk
            .serialize(&mut ser)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
