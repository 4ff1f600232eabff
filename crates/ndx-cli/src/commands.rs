//! Command implementations.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use ndx_container::read_data_file;
use ndx_xarray::{DATA_TYPE, default_registry, export_spec, find_external_xarray_datasets};

use crate::cli::{ExportSpecArgs, FindArgs};

/// Regenerate the schema file pair in the output directory.
pub fn run_export_spec(args: &ExportSpecArgs) -> Result<()> {
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_dir.display()
        )
    })?;
    export_spec(&args.output_dir)?;
    info!(dir = %args.output_dir.display(), "wrote schema file pair");
    println!(
        "wrote ndx-xarray.namespace.yaml and ndx-xarray.extensions.yaml to {}",
        args.output_dir.display()
    );
    Ok(())
}

/// List every external xarray dataset reference in a data file.
pub fn run_find(args: &FindArgs) -> Result<()> {
    let registry = default_registry();
    let data = read_data_file(&args.file, &registry)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let found = find_external_xarray_datasets(&data);
    if found.is_empty() {
        println!("no {DATA_TYPE} objects found in {}", args.file.display());
        return Ok(());
    }

    println!("{DATA_TYPE} objects found in {}:", args.file.display());
    for (index, dataset) in found.iter().enumerate() {
        println!("{}: {DATA_TYPE} '{}'", index + 1, dataset.name);
        println!("\tobject id: {}", dataset.object_id);
        println!("\tHDF5 path: {}", dataset.hdf5_path);
        println!("\thierarchy: {}", dataset.hierarchy);
    }
    Ok(())
}
