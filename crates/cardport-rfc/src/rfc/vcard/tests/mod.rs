mod fixtures;
mod import;
