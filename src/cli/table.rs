use crate::Point;
use crate::Vector;
use anyhow::Context;
use anyhow::Result;
use std::io::BufRead;
use std::io::Write;

/// A CSV row kept verbatim as point metadata.
pub type Row = Vec<String>;

/// Parses comma-separated rows into points.
///
/// Fields are split on every comma; quoted fields are rejected.
/// Blank lines are skipped. With `columns`, only those fields become
/// coordinates; otherwise every field does. The whole row is kept as metadata.
pub fn read<R>(reader: R, columns: Option<&[usize]>) -> Result<Vec<Point<Row>>>
where
    R: BufRead,
{
    let mut points = Vec::new();
    for (line, text) in reader.lines().enumerate() {
        let text = text.with_context(|| format!("reading line {}", line + 1))?;
        if text.trim().is_empty() {
            continue;
        }
        anyhow::ensure!(
            !text.contains('"'),
            "line {}: quoted fields are not supported",
            line + 1
        );
        let row = text
            .split(',')
            .map(|field| field.trim().to_string())
            .collect::<Row>();
        let vector = project(&row, columns).with_context(|| format!("line {}", line + 1))?;
        points.push(Point::new(vector, row));
    }
    Ok(points)
}

fn project(row: &[String], columns: Option<&[usize]>) -> Result<Vector> {
    let parse = |i: usize| -> Result<f64> {
        let field = row
            .get(i)
            .with_context(|| format!("missing column {} (row has {})", i, row.len()))?;
        field
            .parse::<f64>()
            .with_context(|| format!("column {} is not a number: '{}'", i, field))
    };
    match columns {
        Some(columns) => columns.iter().map(|&i| parse(i)).collect(),
        None => (0..row.len()).map(parse).collect(),
    }
}

/// Writes every input row followed by its cluster label.
pub fn write<W>(mut writer: W, points: &[Point<Row>], labels: &[usize]) -> Result<()>
where
    W: Write,
{
    for (point, label) in points.iter().zip(labels.iter()) {
        writeln!(writer, "{},{}", point.meta().join(","), label)?;
    }
    writer.flush()?;
    Ok(())
}
