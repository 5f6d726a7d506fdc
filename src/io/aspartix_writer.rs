use super::ResponseWriter;
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object writes [`AAFramework`]s using the Aspartix input format,
/// as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html),
/// and the answers to the problems solved on them.
///
/// Extensions are written between square brackets, their arguments being separated by commas (`[a,b]`).
/// Lists of extensions are written between square brackets too (`[[a],[b]]`).
///
/// # Example
///
/// ```
/// # use crustaspic::aa::build_af;
/// # use crustaspic::io::AspartixWriter;
/// let af = build_af("", &["a", "b"], &[("a", "b")]).unwrap();
/// let mut buffer = Vec::new();
/// AspartixWriter::default().write_framework(&af, &mut buffer).unwrap();
/// assert_eq!("arg(a).\narg(b).\natt(a,b).\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter;

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing an Aspartix framework";
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for defeat in framework.iter_defeats() {
            writeln!(writer, "att({},{}).", defeat.attacker(), defeat.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

fn extension_to_string<T: LabelType>(extension: &[&Argument<T>]) -> String {
    format!(
        "[{}]",
        extension
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(",")
    )
}

impl<T> ResponseWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing problem has no extension";
        writeln!(writer, "NO").context(context)?;
        writer.flush().context(context)
    }

    fn write_single_extension(&self, writer: &mut dyn Write, extension: &[&Argument<T>]) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", extension_to_string(extension)).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(&self, writer: &mut dyn Write, extensions: &[Vec<&Argument<T>>]) -> Result<()> {
        let context = "while writing extensions";
        let formatted = extensions
            .iter()
            .map(|e| extension_to_string(e))
            .collect::<Vec<String>>()
            .join(",");
        writeln!(writer, "[{}]", formatted).context(context)?;
        writer.flush().context(context)
    }

    fn write_extension_count(&self, writer: &mut dyn Write, count: usize) -> Result<()> {
        let context = "while writing an extension count";
        writeln!(writer, "{}", count).context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
        certificate: Option<&[&Argument<T>]>,
    ) -> Result<()> {
        let context = "while writing an acceptance status";
        writeln!(writer, "{}", if acceptance_status { "YES" } else { "NO" }).context(context)?;
        if let Some(c) = certificate {
            writeln!(writer, "{}", extension_to_string(c)).context(context)?;
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::{build_af, ArgumentSet};

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write),
    {
        let mut buffer = Vec::new();
        f(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_af() {
        let af = build_af("", &["a", "b", "c"], &[("a", "a"), ("b", "c")]).unwrap();
        assert_eq!(
            "arg(a).\narg(b).\narg(c).\natt(a,a).\natt(b,c).\n",
            written(|w| AspartixWriter.write_framework(&af, w).unwrap())
        );
    }

    #[test]
    fn test_write_single_extension() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let ext = args.iter().collect::<Vec<_>>();
        assert_eq!(
            "[a,b,c]\n",
            written(|w| AspartixWriter.write_single_extension(w, &ext[..]).unwrap())
        );
    }

    #[test]
    fn test_write_empty_extension() {
        assert_eq!(
            "[]\n",
            written(|w| AspartixWriter
                .write_single_extension(w, &[] as &[&Argument<String>])
                .unwrap())
        );
    }

    #[test]
    fn test_write_extensions() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let exts = vec![
            vec![],
            vec![args.get_argument_by_id(0)],
            vec![args.get_argument_by_id(0), args.get_argument_by_id(1)],
        ];
        assert_eq!(
            "[[],[a],[a,b]]\n",
            written(|w| AspartixWriter.write_extensions(w, &exts[..]).unwrap())
        );
        assert_eq!(
            "[]\n",
            written(|w| AspartixWriter
                .write_extensions(w, &[] as &[Vec<&Argument<&str>>])
                .unwrap())
        );
    }

    #[test]
    fn test_write_no_extension() {
        assert_eq!(
            "NO\n",
            written(|w| ResponseWriter::<String>::write_no_extension(&AspartixWriter, w).unwrap())
        );
    }

    #[test]
    fn test_write_extension_count() {
        assert_eq!(
            "3\n",
            written(|w| ResponseWriter::<String>::write_extension_count(&AspartixWriter, w, 3).unwrap())
        );
    }

    #[test]
    fn test_write_acceptance_status() {
        assert_eq!(
            "YES\n",
            written(|w| AspartixWriter
                .write_acceptance_status(w, true, None as Option<&[&Argument<String>]>)
                .unwrap())
        );
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let cert = vec![args.get_argument_by_id(1)];
        assert_eq!(
            "NO\n[b]\n",
            written(|w| AspartixWriter
                .write_acceptance_status(w, false, Some(cert.as_slice()))
                .unwrap())
        );
    }
}
