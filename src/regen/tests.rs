use super::*;
use std::time::Instant;

/// Runs `script` through `sh`, which sees `-o <output>` as `$1 $2`.
fn shell_command(script: &str, timeout: Duration) -> MkconfigCommand {
    MkconfigCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string(), "sh".to_string()],
        timeout,
    }
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("grubctl_regen_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_success_writes_output_and_reports_ok() {
    let dir = temp_dir("ok");
    let output = dir.join("grub.cfg");
    let regen = Regenerator::new(
        shell_command("echo \"menuentry 'New' {\" > \"$2\"", Duration::from_secs(5)),
        output.clone(),
    );

    let (completion, mut rx) = Completion::channel();
    let id = regen.generate(completion);
    assert_eq!(id, 1);

    let event = rx.recv().await.unwrap();
    assert_eq!(event, Generated { id: 1, ok: true });
    assert!(std::fs::read_to_string(&output).unwrap().contains("'New'"));

    // Exactly one event per run.
    assert!(rx.recv().await.is_none());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_failure_reports_not_ok() {
    let regen = Regenerator::new(
        shell_command("exit 3", Duration::from_secs(5)),
        PathBuf::from("/nonexistent/grub.cfg"),
    );
    let (completion, mut rx) = Completion::channel();
    let id = regen.generate(completion);
    assert_eq!(rx.recv().await, Some(Generated { id, ok: false }));
}

#[tokio::test]
async fn test_missing_program_reports_not_ok() {
    let regen = Regenerator::new(
        MkconfigCommand {
            program: "grubctl-definitely-not-installed".to_string(),
            args: Vec::new(),
            timeout: Duration::from_secs(5),
        },
        PathBuf::from("/tmp/grub.cfg"),
    );
    let (completion, mut rx) = Completion::channel();
    let id = regen.generate(completion);
    assert_eq!(rx.recv().await, Some(Generated { id, ok: false }));
}

#[tokio::test]
async fn test_timeout_kills_and_reports_not_ok() {
    let regen = Regenerator::new(
        shell_command("sleep 10", Duration::from_millis(200)),
        PathBuf::from("/tmp/grub.cfg"),
    );
    let started = Instant::now();
    let (completion, mut rx) = Completion::channel();
    let id = regen.generate(completion);
    assert_eq!(rx.recv().await, Some(Generated { id, ok: false }));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_ids_increase_per_invocation() {
    let regen = Regenerator::new(
        shell_command("true", Duration::from_secs(5)),
        PathBuf::from("/tmp/grub.cfg"),
    );
    let (completion, mut rx) = Completion::channel();
    let first = regen.generate(completion);

    let (tx, mut cb_rx) = mpsc::unbounded_channel();
    let second = regen.generate(Completion::callback(move |event| {
        tx.send(event).unwrap();
    }));
    assert_eq!((first, second), (1, 2));

    assert_eq!(rx.recv().await, Some(Generated { id: 1, ok: true }));
    assert_eq!(cb_rx.recv().await, Some(Generated { id: 2, ok: true }));
}
