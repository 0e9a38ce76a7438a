//! The `gen` command: generate structural methods for class skeletons.
//!
//! Prints the selected methods of every class in the input, or whole classes
//! with `--class`. Output goes to stdout unless `-o` names a file.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;
use verse_codegen::{
    attach, generate, Emitter, FileEmitter, GenConfig, MethodSelection, Printer, StringEmitter,
};

use crate::error::CliError;
use crate::input::{parse_classes, ClassDecl, InputError};

/// Options for `verse gen`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenOptions {
    pub input: PathBuf,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
    pub config: GenConfig,
    pub selection: MethodSelection,
    /// Print whole classes rather than bare methods.
    pub whole_class: bool,
}

impl GenOptions {
    /// Defaults for reading `input`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        GenOptions {
            input: input.into(),
            output: None,
            config: GenConfig::default(),
            selection: MethodSelection::all(),
            whole_class: false,
        }
    }
}

/// Parse the arguments following `gen`.
pub fn parse_gen_options(args: &[String]) -> Result<GenOptions, CliError> {
    let mut input = None;
    let mut output = None;
    let mut config = GenConfig::default();
    let mut selection = MethodSelection::all();
    let mut whole_class = false;

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--hash=") {
            config.hash_strategy = value.parse()?;
        } else if let Some(value) = arg.strip_prefix("--indent=") {
            config.indent_size = match value.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(CliError::InvalidIndent(value.to_string())),
            };
        } else if let Some(value) = arg.strip_prefix("--methods=") {
            selection = value.parse()?;
        } else if arg == "--class" {
            whole_class = true;
        } else if arg == "-o" {
            let path = args.next().ok_or(CliError::MissingValue("-o"))?;
            output = Some(PathBuf::from(path));
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(GenOptions {
        input: input.ok_or(CliError::MissingInput)?,
        output,
        config,
        selection,
        whole_class,
    })
}

/// Print `classes` through `emitter`, separated by blank lines.
pub fn emit_classes<E: Emitter>(emitter: &mut E, classes: &[ClassDecl], options: &GenOptions) {
    for (index, class) in classes.iter().enumerate() {
        if index > 0 {
            emitter.emit_newline();
        }

        if options.whole_class {
            let mut builder = class.class_builder();
            attach(&mut builder, class.target(), &options.config, options.selection);
            Printer::new(&mut *emitter, &options.config).print_class(&builder.build());
            continue;
        }

        let methods = generate(class.target(), &options.config, options.selection);
        for (position, method) in methods.iter().enumerate() {
            if position > 0 {
                emitter.emit_newline();
            }
            Printer::new(&mut *emitter, &options.config).print_method(method);
        }
    }
}

/// Generate for every class in `source`, returning the printed text.
pub fn render_source(source: &str, options: &GenOptions) -> Result<String, InputError> {
    let classes = parse_classes(source)?;
    let mut emitter = StringEmitter::with_capacity(source.len() * 8);
    emit_classes(&mut emitter, &classes, options);
    Ok(emitter.output())
}

/// Run `verse gen`.
pub fn run_gen(options: &GenOptions) -> Result<(), CliError> {
    let source = fs::read_to_string(&options.input).map_err(|source| CliError::Read {
        path: options.input.clone(),
        source,
    })?;
    let classes = parse_classes(&source).map_err(|source| CliError::Input {
        path: options.input.clone(),
        source,
    })?;
    debug!(
        input = %options.input.display(),
        classes = classes.len(),
        whole_class = options.whole_class,
        "generating"
    );

    if let Some(path) = &options.output {
        let write_error = |source: io::Error| CliError::Write {
            path: path.clone(),
            source,
        };
        let mut emitter = FileEmitter::create(path).map_err(write_error)?;
        emit_classes(&mut emitter, &classes, options);
        emitter.finish().map_err(write_error)?;
        debug!(output = %path.display(), "wrote generated source");
    } else {
        let mut emitter = StringEmitter::new();
        emit_classes(&mut emitter, &classes, options);
        print!("{}", emitter.output());
    }
    Ok(())
}
