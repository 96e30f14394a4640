use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const HEADER: &str = concat!(
    "#, fuzzy\n",
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
);

#[test]
fn test_extract_directory() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"import { _ } from './i18n';

export const title = _('Welcome back');
export const body = _("Press \"Save\" to continue");
"#,
    )?;
    test.write_file("src/lib/util.js", "throw new Error(_('it\\'s broken'));\n")?;
    test.write_file("node_modules/dep/index.js", "_('dependency')\n")?;
    test.write_file("coverage/report.js", "_('coverage')\n")?;
    test.write_file("assets/logo.png", "_('binary')\n")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r#"
    #, fuzzy
    msgid ""
    msgstr ""
    "Content-Type: text/plain; charset=UTF-8\n"

    #: src/app.js:3
    msgid "Welcome back"
    msgstr "Welcome back"

    #: src/app.js:4
    msgid "Press \"Save\" to continue"
    msgstr "Press \"Save\" to continue"

    #: src/lib/util.js:1
    msgid "it's broken"
    msgstr "it's broken"
    "#);

    Ok(())
}

#[test]
fn test_extract_single_file_with_function_flag() -> Result<()> {
    let test = CliTest::with_file(
        "component.jsx",
        "<p>{t('a')} and {t('b', { count })}</p>\n<p>{t(key)}</p>\n",
    )?;

    let output = test
        .extract_command()
        .args(["component.jsx", "-f", "t"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "{}\n#: component.jsx:1\nmsgid \"a\"\nmsgstr \"a\"\n\nmsgid \"b\"\nmsgstr \"b\"\n",
            HEADER
        )
    );

    Ok(())
}

#[test]
fn test_header_per_root() -> Result<()> {
    let test = CliTest::with_file("a.js", "_('from a')\n")?;
    test.write_file("b.js", "_('from b')\n")?;

    let output = test.extract_command().args(["a.js", "b.js"]).output()?;

    let out = stdout(&output);
    assert_eq!(out.matches(HEADER).count(), 2);
    assert!(out.find("#: a.js:1").unwrap() < out.find("#: b.js:1").unwrap());

    Ok(())
}

#[test]
fn test_fully_filtered_directory_outputs_header_only() -> Result<()> {
    let test = CliTest::with_file("node_modules/pkg/index.js", "_('dep')\n")?;
    test.write_file(".hidden.js", "_('hidden')\n")?;
    test.write_file("archive.zip", "_('zip')\n")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), HEADER);

    Ok(())
}

#[test]
fn test_empty_directory_warns_in_verbose_mode() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("-v").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), HEADER);
    let err = stderr(&output);
    assert!(err.contains("note: no .glotextractrc.json found, using defaults"));
    assert!(err.contains("warning: No eligible files found"));
    assert!(err.contains("Extracted 0 messages from 0 files"));

    Ok(())
}

#[test]
fn test_missing_path_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).starts_with("Error: Cannot access missing: "),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_unreadable_file_fails_with_its_path() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "_('a')\n")?;
    test.write_file("src/b.js", b"_('b')\n\xff\xfe\xfd\n".as_slice())?;
    test.write_file("src/c.js", "_('c')\n")?;

    let output = test.extract_command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert_eq!(err.matches("Error:").count(), 1);
    assert!(err.contains("Cannot read src/b.js"), "stderr: {}", err);

    Ok(())
}

#[test]
fn test_output_file() -> Result<()> {
    let test = CliTest::with_file("app.js", "_('Saved')\n")?;

    let output = test
        .extract_command()
        .args(["app.js", "-o", "messages.pot"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(
        test.read_file("messages.pot")?,
        format!("{}\n#: app.js:1\nmsgid \"Saved\"\nmsgstr \"Saved\"\n", HEADER)
    );

    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".glotextractrc.json",
        r#"{
            "functionName": "i18n",
            "includes": ["*.ts"],
            "ignoreDirs": ["generated"]
        }"#,
    )?;
    test.write_file("src/app.ts", "i18n('typed')\n_('default fn')\n")?;
    test.write_file("src/app.js", "i18n('not included')\n")?;
    test.write_file("generated/types.ts", "i18n('generated')\n")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("{}\n#: src/app.ts:1\nmsgid \"typed\"\nmsgstr \"typed\"\n", HEADER)
    );

    Ok(())
}

#[test]
fn test_custom_pattern() -> Result<()> {
    let test = CliTest::with_file("app.py", "label = gettext(\"Open\")\nother = tr('Close')\n")?;

    let output = test
        .extract_command()
        .args(["app.py", "--pattern", r#"gettext\(("[^"]*")\)"#])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{}\n#: app.py:1\nmsgid \"Open\"\nmsgstr \"Open\"\n", HEADER)
    );

    Ok(())
}

#[test]
fn test_invalid_pattern_fails() -> Result<()> {
    let test = CliTest::with_file("app.js", "_('a')\n")?;

    let output = test
        .extract_command()
        .args(["--pattern", "(unclosed"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid configuration: invalid pattern"));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_output_is_identical_across_runs() -> Result<()> {
    let test = CliTest::new()?;
    for i in 0..20 {
        let body: String = (0..25).map(|n| format!("_('msg {} {}')\n", i, n)).collect();
        test.write_file(&format!("src/mod{}/file.js", i), body)?;
    }

    let first = test.extract_command().output()?;
    let second = test.extract_command().output()?;

    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
    assert_eq!(stdout(&first).matches("msgid \"msg").count(), 20 * 25);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("extract"));
    assert!(stdout(&output).contains("init"));

    Ok(())
}
