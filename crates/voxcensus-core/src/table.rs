//! Wide CSV rendering: one row per chunk, one column per block name.
//!
//! The column set is only known once the whole traversal has finished, so
//! the writer takes the finalized accumulator output (two-pass strategy).
//! File output is atomic: the table is rendered to a temporary sibling file
//! and renamed over the target, so a failed run never leaves a partial CSV.

use std::borrow::Cow;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::aggregate::ChunkResult;

/// Errors raised while writing the output table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The table could not be written to disk.
    #[error("failed to write table to {path}: {source}")]
    Io {
        /// Target output path.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders the wide table as CSV to any writer.
///
/// Header: `chunk_x,chunk_z,dominant_biome` followed by the sorted block
/// names. One data row per result in traversal order, with `0` filled in
/// for block names absent from that chunk.
pub fn render_csv<W: Write>(
    out: &mut W,
    results: &[ChunkResult],
    block_names: &[String],
) -> io::Result<()> {
    write!(out, "chunk_x,chunk_z,dominant_biome")?;
    for name in block_names {
        write!(out, ",{}", escape_field(name))?;
    }
    writeln!(out)?;

    for result in results {
        write!(
            out,
            "{},{},{}",
            result.pos.x,
            result.pos.z,
            escape_field(&result.dominant_biome)
        )?;
        for name in block_names {
            let count = result.block_counts.get(name).copied().unwrap_or(0);
            write!(out, ",{count}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the wide table to `path` as UTF-8 CSV, atomically.
pub fn write_csv_file(
    path: &Path,
    results: &[ChunkResult],
    block_names: &[String],
) -> Result<(), TableError> {
    let io_err = |source| TableError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let write_result = (|| {
        let file = std::fs::File::create(&tmp_path)?;
        let mut out = BufWriter::new(file);
        render_csv(&mut out, results, block_names)?;
        out.flush()
    })();

    if let Err(source) = write_result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(io_err(source));
    }

    std::fs::rename(&tmp_path, path).map_err(io_err)
}

/// Quotes a CSV field when it contains a delimiter, quote, or line break.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;
    use voxcensus_world::ChunkPos;

    use super::*;

    fn result(x: i32, z: i32, biome: &str, counts: &[(&str, u64)]) -> ChunkResult {
        let mut block_counts = FxHashMap::default();
        for (name, count) in counts {
            block_counts.insert(name.to_string(), *count);
        }
        ChunkResult {
            pos: ChunkPos::new(x, z),
            dominant_biome: biome.to_string(),
            block_counts,
        }
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_header_and_zero_fill() {
        let results = vec![
            result(0, 0, "minecraft:plains", &[("minecraft:stone", 4096)]),
            result(1, 0, "unknown", &[("minecraft:dirt", 64)]),
        ];
        let block_names = names(&["minecraft:dirt", "minecraft:stone"]);

        let mut buf = Vec::new();
        render_csv(&mut buf, &results, &block_names).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "chunk_x,chunk_z,dominant_biome,minecraft:dirt,minecraft:stone",
                "0,0,minecraft:plains,0,4096",
                "1,0,unknown,64,0",
            ]
        );
    }

    #[test]
    fn test_header_only_when_no_results() {
        let mut buf = Vec::new();
        render_csv(&mut buf, &[], &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "chunk_x,chunk_z,dominant_biome\n"
        );
    }

    #[test]
    fn test_field_escaping() {
        assert_eq!(escape_field("minecraft:stone"), "minecraft:stone");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_file_write_and_rename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let results = vec![result(0, 0, "unknown", &[("minecraft:air", 1)])];

        write_csv_file(&path, &results, &names(&["minecraft:air"])).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("chunk_x,chunk_z,dominant_biome,minecraft:air"));
        // No temp file left behind.
        assert!(!dir.path().join("out.csv.tmp").exists());
    }

    #[test]
    fn test_unwritable_target_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_csv_file(&path, &[], &[]).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
