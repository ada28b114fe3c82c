//! Reading problems from files and streams

use qm_logic::{InputError, Problem, ProblemReader, QmConfig, QmError, ReadError};
use std::io::{BufReader, Write};
use tempfile::NamedTempFile;

#[test]
fn test_from_file() -> std::io::Result<()> {
    let mut temp = NamedTempFile::new()?;
    writeln!(temp, "# f(a, b, c, d)")?;
    writeln!(temp, "4")?;
    writeln!(temp, "6 4 8 10 11 12 15")?;
    writeln!(temp, "2 9 14")?;
    temp.flush()?;

    let problem = Problem::from_file(temp.path())?;
    assert_eq!(problem.width(), 4);
    assert_eq!(problem.minterms(), [4, 8, 10, 11, 12, 15]);
    assert_eq!(problem.dontcares(), [9, 14]);

    let result = problem.minimize(&QmConfig::default())?;
    assert_eq!(result.cover().len(), 3);
    Ok(())
}

#[test]
fn test_from_reader() {
    let reader = BufReader::new("3 4 0 1 2 3 0".as_bytes());
    let problem = Problem::from_reader(reader).unwrap();
    assert_eq!(problem.width(), 3);
    assert_eq!(problem.minterms().len(), 4);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Problem::from_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));

    let qm_err: QmError = err.into();
    assert!(matches!(qm_err, QmError::Io(_)));
}

#[test]
fn test_invalid_file_contents() -> std::io::Result<()> {
    let mut temp = NamedTempFile::new()?;
    write!(temp, "2\n2 1 3\n1 3\n")?;
    temp.flush()?;

    match Problem::from_file(temp.path()) {
        Err(ReadError::Input(InputError::Overlap { value })) => assert_eq!(value, 3),
        other => panic!("expected overlap error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_variable_count_limits() {
    assert!(matches!(
        Problem::from_text("0 0"),
        Err(ReadError::Input(InputError::InvalidVariableCount { count: 0, .. }))
    ));
    assert!(matches!(
        Problem::from_text("40 0"),
        Err(ReadError::Input(InputError::InvalidVariableCount { count: 40, .. }))
    ));
}

#[test]
fn test_config_limit_is_separate_from_input_limit() {
    // 20 variables is a valid problem but above the default run limit
    let problem = Problem::from_text("20 1 1048575").unwrap();
    let err = problem.minimize(&QmConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        QmError::Input(InputError::InvalidVariableCount { count: 20, max: 16 })
    ));

    let config = QmConfig {
        max_variables: 20,
        ..Default::default()
    };
    let result = problem.minimize(&config).unwrap();
    assert_eq!(result.cover().terms()[0].pattern(20), "1".repeat(20));
}
