use std::error::Error;
use std::fs;
use regex::Regex;
use crate::config::CacheConfig;

pub const TRACES_PATH: &str = "traces";
pub const EXPECTED_PATH: &str = "traces/expected";

pub struct TestCase {
    pub trace: String,
    pub expected: String,
    pub config: CacheConfig,
}

pub fn get_test_cases() -> Result<Vec<TestCase>, Box<dyn Error>> {
    let mut out = Vec::new();
    let expected_file_directory = fs::read_dir(EXPECTED_PATH)?;
    let expected_pattern = Regex::new(
        r"expected-(?P<trace>[0-9a-zA-Z_]+)-s(?P<s>[0-9]+)E(?P<E>[0-9]+)b(?P<b>[0-9]+)\.json",
    )?;
    let mut files = expected_file_directory
        .into_iter()
        .filter(|a| expected_pattern.is_match(&a.as_ref().unwrap().file_name().into_string().unwrap()))
        .map(|a| a.unwrap())
        .collect::<Vec<_>>();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    for file in files {
        // Get file name
        let file_name = file
            .file_name()
            .into_string()
            .map_err(|e| format!("Can't convert OS string ({e:?}) to standard string"))?;
        println!("Running case {file_name}");
        // Get components of name
        let tokens = expected_pattern
            .captures(&file_name)
            .ok_or("Couldn't parse the file name".to_string())?;
        let trace_name = tokens
            .get(1)
            .ok_or("Couldn't get the trace name from the expected file name".to_string())?
            .as_str();
        let set_bits = tokens
            .get(2)
            .ok_or("Couldn't get the set bits from the expected file name".to_string())?
            .as_str()
            .parse::<u32>()?;
        let associativity = tokens
            .get(3)
            .ok_or("Couldn't get the associativity from the expected file name".to_string())?
            .as_str()
            .parse::<u32>()?;
        let block_bits = tokens
            .get(4)
            .ok_or("Couldn't get the block bits from the expected file name".to_string())?
            .as_str()
            .parse::<u32>()?;
        out.push(TestCase {
            trace: format!("{TRACES_PATH}/{trace_name}.trace"),
            expected: format!("{EXPECTED_PATH}/{file_name}"),
            config: CacheConfig::new(set_bits, associativity, block_bits)?,
        })
    }
    Ok(out)
}
