use crate::helpe::*;

/// Renders a chunk size as the symbolic constant used in the emitted
/// table, e.g. `c16KB` or `c2MB`.
pub fn chunk_label(size: Bytes) -> String {
    if size < MB {
        format!("c{}KB", size / KB)
    } else {
        format!("c{}MB", size / MB)
    }
}

/// Writes the solved table as a C constant array, one row per bin,
/// each annotated with its waste percentage.
///
/// Unresolved bins become a comment row. Shipping them as zeroed
/// entries would make them indistinguishable from a legitimately
/// tiny size class to a naive downstream consumer.
pub fn emit_table(bins: &[Bin], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "static const binconfig_t c_abinconfigs[] = {{")?;
    for bin in bins {
        match &bin.fit {
            Some(fit)   => {
                writeln!(
                    out,
                    "    {{{}, {}, {}, {}}},  // {:.2}%",
                    bin.index,
                    bin.alloc_size,
                    chunk_label(fit.chunk.size),
                    fit.count,
                    fit.waste_pct,
                )?;
            },
            None        => {
                writeln!(
                    out,
                    "    // {}: no acceptable chunk for {} bytes",
                    bin.index,
                    bin.alloc_size,
                )?;
            },
        }
    }

    writeln!(out, "}};")
}

/// Counts how many size classes landed on each chunk, in order of
/// first use. With an ascending request list that order tracks the
/// catalog closely enough to read as a capacity report.
pub fn chunk_usage(bins: &[Bin]) -> IndexMap<Chunk, usize> {
    let mut res = IndexMap::new();
    for bin in bins {
        if let Some(fit) = &bin.fit {
            *res.entry(fit.chunk).or_insert(0) += 1;
        }
    }

    res
}

/// Prints the [chunk_usage] report, one chunk per line.
pub fn emit_summary(
    usage:      &IndexMap<Chunk, usize>,
    page_size:  Bytes,
    out:        &mut impl Write,
) -> std::io::Result<()> {
    for (chunk, classes) in usage {
        writeln!(
            out,
            "{}:\t{} pages,\t{} size classes",
            chunk_label(chunk.size),
            chunk.pages(page_size),
            classes,
        )?;
    }

    Ok(())
}
