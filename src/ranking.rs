use std::io::{BufRead, BufReader, BufWriter, Write};

use autocompress::{CompressionLevel, autodetect_create, autodetect_open};

use crate::{
    errors::{PrioError, as_io_error, wrap_file_error},
    heap::Heap,
    options::OrderOptions,
};

fn parse_line(path: &str, line_no: usize, line: &str) -> std::io::Result<Option<f64>> {
    let text = line.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(Some(value)),
        _ => Err(PrioError::BadValue(
            String::from(path),
            line_no,
            String::from(text),
        ))
        .map_err(as_io_error),
    }
}

/// Read one number per line, skipping blank lines and `#` comments.
pub fn read_values(path: &str) -> std::io::Result<Vec<f64>> {
    let reader = autodetect_open(path).map_err(|e| wrap_file_error(e, path))?;
    let reader = BufReader::new(reader);
    let values = reader
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(path, i + 1, &line?));
    itertools::process_results(values, |xs| xs.flatten().collect())
}

pub fn write_values(path: &str, values: &[f64]) -> std::io::Result<()> {
    let writer =
        autodetect_create(path, CompressionLevel::Default).map_err(|e| wrap_file_error(e, path))?;
    let mut writer = BufWriter::new(writer);
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()?;
    Ok(())
}

/// All values, highest priority first.
pub fn sort_values(values: Vec<f64>, order: &OrderOptions) -> Vec<f64> {
    let mut heap = Heap::from_vec(values, order.comparator());
    std::iter::from_fn(|| heap.remove()).collect()
}

/// The `k` highest priority values, highest first.
///
/// Keeps at most `k` values in a heap of the opposite order, so its root
/// is the worst value kept so far and is the one to evict.
pub fn top_values<I>(values: I, k: usize, order: &OrderOptions) -> std::io::Result<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    if k == 0 {
        return Err(PrioError::ZeroTopK).map_err(as_io_error);
    }
    let better = order.comparator();
    let mut kept = Heap::with_capacity(k, order.reversed().comparator());
    for value in values {
        if kept.len() < k {
            kept.insert(value);
        } else if let Some(worst) = kept.peek() {
            if better(&value, worst) {
                kept.replace(0, value);
            }
        }
    }
    let mut res = kept.into_sorted_vec();
    res.reverse();
    Ok(res)
}

pub fn sort_file(input: &str, out: &str, order: &OrderOptions) -> std::io::Result<()> {
    log::info!("reading values from '{}'", input);
    let values = read_values(input)?;
    log::info!("sorting {} values", values.len());
    let values = sort_values(values, order);
    log::info!("writing values to '{}'", out);
    write_values(out, &values)
}

pub fn top_file(input: &str, out: &str, k: usize, order: &OrderOptions) -> std::io::Result<()> {
    log::info!("reading values from '{}'", input);
    let values = read_values(input)?;
    let n = values.len();
    let values = top_values(values, k, order)?;
    log::info!("kept {} of {} values", values.len(), n);
    log::debug!("top values: {:?}", values);
    write_values(out, &values)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("prioheap-{}-{}", std::process::id(), name))
    }

    fn descending() -> OrderOptions {
        OrderOptions { descending: true }
    }

    #[test]
    fn test_sort_values() {
        let xs = vec![5.0, 3.0, 8.0, 1.0, 4.0];
        assert_eq!(
            sort_values(xs.clone(), &OrderOptions::default()),
            vec![1.0, 3.0, 4.0, 5.0, 8.0]
        );
        assert_eq!(
            sort_values(xs, &descending()),
            vec![8.0, 5.0, 4.0, 3.0, 1.0]
        );
        assert!(sort_values(Vec::new(), &descending()).is_empty());
    }

    #[test]
    fn test_top_values() {
        let xs = vec![5.0, 3.0, 8.0, 1.0, 4.0, 9.0, 2.0];
        assert_eq!(
            top_values(xs.clone(), 3, &OrderOptions::default()).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
        assert_eq!(
            top_values(xs.clone(), 3, &descending()).unwrap(),
            vec![9.0, 8.0, 5.0]
        );
        assert_eq!(top_values(xs.clone(), 20, &descending()).unwrap().len(), 7);
        assert!(top_values(xs, 0, &descending()).is_err());
    }

    #[test]
    fn test_top_values_random() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut xs: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        xs.shuffle(&mut rng);
        let top = top_values(xs, 10, &descending()).unwrap();
        let expected: Vec<f64> = (990..1000).rev().map(|i| i as f64).collect();
        assert_eq!(top, expected);
    }

    #[test]
    fn test_top_values_ties() {
        let xs = vec![3.0, 3.0, 3.0, 1.0];
        assert_eq!(
            top_values(xs.clone(), 2, &OrderOptions::default()).unwrap(),
            vec![1.0, 3.0]
        );
        assert_eq!(top_values(xs, 2, &descending()).unwrap(), vec![3.0, 3.0]);
        let ys = vec![2.0, 5.0, 5.0, 4.0, 5.0, 1.0];
        assert_eq!(
            top_values(ys.clone(), 2, &descending()).unwrap(),
            vec![5.0, 5.0]
        );
        assert_eq!(
            top_values(ys, 4, &OrderOptions::default()).unwrap(),
            vec![1.0, 2.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_read_values_missing_file() {
        let path = scratch("missing-values.txt");
        let e = read_values(path.to_str().unwrap()).unwrap_err();
        assert!(e.to_string().contains("missing-values.txt"));
    }

    #[test]
    fn test_write_values_bad_path() {
        let path = scratch("no-such-dir").join("out-values.txt");
        let e = write_values(path.to_str().unwrap(), &[1.0]).unwrap_err();
        assert!(e.to_string().contains("out-values.txt"));
    }

    #[test]
    fn test_read_values() {
        let path = scratch("read.txt");
        std::fs::write(&path, "# some values\n3\n\n-1.5\n  7 \n").unwrap();
        let xs = read_values(path.to_str().unwrap()).unwrap();
        assert_eq!(xs, vec![3.0, -1.5, 7.0]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_values_bad_line() {
        let path = scratch("bad.txt");
        std::fs::write(&path, "3\nfour\n5\n").unwrap();
        let res = read_values(path.to_str().unwrap());
        let e = res.unwrap_err();
        assert!(e.to_string().contains(":2 "));
        assert!(e.to_string().contains("'four'"));
        std::fs::write(&path, "3\nNaN\n").unwrap();
        assert!(read_values(path.to_str().unwrap()).is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_sort_file() {
        let input = scratch("sort-in.txt");
        let out = scratch("sort-out.txt");
        std::fs::write(&input, "5\n3\n8\n1\n4\n").unwrap();
        sort_file(input.to_str().unwrap(), out.to_str().unwrap(), &descending()).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "8\n5\n4\n3\n1\n");
        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&out).unwrap();
    }
}
