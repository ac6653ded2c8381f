use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::state::State;
use crate::LoadState;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadState for str {
    fn load_state(&self) -> Result<State, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(text.parse()?)
    }
}
