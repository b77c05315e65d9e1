use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Read lines from `reader` in batches, calling `on_batch` for each batch.
pub fn for_each_line_batch<F>(
    reader: Box<dyn BufRead>,
    batch_size: usize,
    mut on_batch: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnMut(&[String]) -> Result<(), Box<dyn std::error::Error>>,
{
    let mut batch = Vec::with_capacity(batch_size);
    for line in reader.lines() {
        batch.push(line?);
        if batch.len() == batch_size {
            on_batch(&batch)?;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        on_batch(&batch)?;
    }
    Ok(())
}
