use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    name: &'static str,
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(name: &'static str, pipeline: P) -> Self {
        Self { name, pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting {} conversion", self.name);

        // Extract
        tracing::info!("Extracting data...");
        let raw_data = self.pipeline.extract()?;

        // Transform
        tracing::info!("Transforming data...");
        let table = self.pipeline.transform(raw_data)?;
        tracing::info!("Transformed {} rows", table.rows.len());

        // Load
        tracing::info!("Loading data...");
        let output_path = self.pipeline.load(table)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
