mod common;

use common::{add_simple, run_session};
use taskman::locale::Language;

#[test]
fn exit_immediately() {
    let session = run_session(Language::Pt, "0\n");
    assert!(session.output.contains("MENU:"));
    assert!(session.output.contains("Saindo..."));
    assert_eq!(session.len, 0);
}

#[test]
fn end_of_input_ends_session() {
    let session = run_session(Language::Pt, "");
    assert!(session.output.contains("Escolha uma opção:"));
    assert!(!session.output.contains("Saindo..."));
}

#[test]
fn list_empty_prints_dedicated_message() {
    let session = run_session(Language::Pt, "2\n0\n");
    assert!(session.output.contains("TAREFAS:"));
    assert!(session.output.contains("Nenhuma Tarefa cadastrada"));
}

#[test]
fn add_and_list_every_kind() {
    let script = format!(
        "{}1\nSubmit report\nWork\n2\n2024-01-01\n1\nPay rent\nHome\n3\n1\n2\n0\n",
        add_simple("Buy milk", "Shopping")
    );
    let session = run_session(Language::Pt, &script);
    assert_eq!(session.len, 3);
    assert!(session.output.contains("Tarefa adicionada com sucesso:"));
    assert!(
        session
            .output
            .contains("1. Tarefa Simples: Buy milk | Categoria: Shopping | Status: Pendente")
    );
    assert!(session.output.contains(
        "2. Tarefa com Prazo: Submit report | Categoria: Work | Prazo: 2024-01-01 | Status: Pendente"
    ));
    assert!(session.output.contains(
        "3. Tarefa Importante: Pay rent | Categoria: Home | Prioridade: 1 | Status: Pendente"
    ));
}

#[test]
fn complete_then_percentage() {
    let script = format!(
        "{}{}4\n1\n8\n0\n",
        add_simple("a", "x"),
        add_simple("b", "x")
    );
    let session = run_session(Language::Pt, &script);
    assert!(
        session
            .output
            .contains("Tarefa marcada como concluída com sucesso!")
    );
    assert!(session.output.contains("TAREFAS ATUALIZADAS:"));
    assert!(session.output.contains("Porcentagem de tarefas concluídas: 50.0%"));
    assert_eq!(session.completed, 1);
    assert_eq!(session.percentage, 50.0);
}

#[test]
fn percentage_of_empty_list_is_zero() {
    let session = run_session(Language::En, "8\n0\n");
    assert!(session.output.contains("Completed tasks percentage: 0.0%"));
}

#[test]
fn delete_shifts_positions() {
    let script = format!(
        "{}{}3\n1\n0\n",
        add_simple("first", "x"),
        add_simple("second", "x")
    );
    let session = run_session(Language::En, &script);
    assert_eq!(session.len, 1);
    assert!(session.output.contains("Task deleted successfully!"));
    assert!(
        session
            .output
            .contains("1. Simple Task: second | Category: x | Status: Pending")
    );
}

#[test]
fn delete_out_of_range_reports_and_keeps_tasks() {
    let script = format!("{}3\n0\n3\n2\n0\n", add_simple("only", "x"));
    let session = run_session(Language::Pt, &script);
    assert_eq!(session.len, 1);
    assert_eq!(
        session
            .output
            .matches("Índice inválido. Nenhuma tarefa foi excluída.")
            .count(),
        2
    );
}

#[test]
fn malformed_position_returns_to_menu() {
    let script = format!("{}4\nabc\n2\n0\n", add_simple("only", "x"));
    let session = run_session(Language::Pt, &script);
    assert!(
        session
            .output
            .contains("Por favor, insira um número inteiro válido.")
    );
    assert_eq!(session.completed, 0);
    assert!(session.output.contains("1. Tarefa Simples: only"));
}

#[test]
fn malformed_menu_choice_and_unknown_option() {
    let session = run_session(Language::Pt, "abc\n42\n0\n");
    assert!(
        session
            .output
            .contains("Por favor, insira um número inteiro válido.")
    );
    assert!(session.output.contains("Opção inválida!"));
    assert!(session.output.contains("Saindo..."));
}

#[test]
fn edit_description_and_category() {
    let script = format!(
        "{}5\n1\nBuy oat milk\n6\n1\nGroceries\n0\n",
        add_simple("Buy milk", "Shopping")
    );
    let session = run_session(Language::En, &script);
    assert!(session.output.contains("Task description edited successfully!"));
    assert!(session.output.contains("Task category edited successfully!"));
    assert!(
        session
            .output
            .contains("1. Simple Task: Buy oat milk | Category: Groceries | Status: Pending")
    );
}

#[test]
fn edit_invalid_position() {
    let script = format!("{}5\n7\nnew\n0\n", add_simple("keep", "x"));
    let session = run_session(Language::En, &script);
    assert!(session.output.contains("Invalid position. No task was edited."));
    assert!(session.output.contains("1. Simple Task: keep"));
}

#[test]
fn edit_status_round_trip() {
    let script = format!("{}4\n1\n7\n1\nfalse\n8\n0\n", add_simple("a", "x"));
    let session = run_session(Language::Pt, &script);
    assert!(session.output.contains("Status da tarefa editado com sucesso!"));
    assert_eq!(session.completed, 0);
    assert!(session.output.contains("Porcentagem de tarefas concluídas: 0.0%"));
}

#[test]
fn malformed_status_is_rejected() {
    let script = format!("{}7\n1\nmaybe\n0\n", add_simple("a", "x"));
    let session = run_session(Language::En, &script);
    assert!(session.output.contains("Please enter true or false."));
    assert_eq!(session.completed, 0);
}

#[test]
fn malformed_due_date_adds_nothing() {
    let session = run_session(Language::En, "1\nReport\nWork\n2\nsoon\n0\n");
    assert!(session.output.contains("Invalid date."));
    assert_eq!(session.len, 0);
}

#[test]
fn empty_description_is_accepted() {
    let session = run_session(Language::Pt, "1\n\n\n\n2\n0\n");
    assert_eq!(session.len, 1);
    assert!(
        session
            .output
            .contains("1. Tarefa Simples:  | Categoria:  | Status: Pendente")
    );
}

#[test]
fn input_closed_mid_prompt_ends_session() {
    let session = run_session(Language::Pt, "1\nhalf");
    assert_eq!(session.len, 0);
    assert!(session.output.contains("Digite a categoria da tarefa:"));
}

#[test]
fn non_utf8_description_keeps_session_alive() {
    let mut script = add_simple("existing", "x").into_bytes();
    script.extend_from_slice(b"1\ncaf\xe9\nx\n1\n2\n0\n");
    let session = run_session(Language::Pt, &script);
    assert_eq!(session.len, 2);
    assert!(session.output.contains("1. Tarefa Simples: existing"));
    assert!(session.output.contains("2. Tarefa Simples: caf\u{FFFD} | Categoria: x"));
    assert!(session.output.contains("Saindo..."));
}

#[test]
fn non_utf8_menu_choice_is_rejected() {
    let session = run_session(Language::En, b"\xff\xfe\n0\n");
    assert!(session.output.contains("Please enter a valid integer."));
    assert!(session.output.contains("Exiting..."));
}
