pub mod genome_file;

pub use genome_file::{load_genomes, load_genomes_from_path, GenomeReader};
