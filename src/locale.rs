use serde::Deserialize;

/// Language of the label and message catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "pt-br" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Pt => &PT_LABELS,
            Language::En => &EN_LABELS,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Pt => &PT_MESSAGES,
            Language::En => &EN_MESSAGES,
        }
    }
}

/// Field labels used when rendering a task line.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub simple: &'static str,
    pub deadline: &'static str,
    pub important: &'static str,
    pub category: &'static str,
    pub due: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    pub completed: &'static str,
    pub pending: &'static str,
}

pub static PT_LABELS: Labels = Labels {
    simple: "Tarefa Simples",
    deadline: "Tarefa com Prazo",
    important: "Tarefa Importante",
    category: "Categoria",
    due: "Prazo",
    priority: "Prioridade",
    status: "Status",
    completed: "Concluída",
    pending: "Pendente",
};

pub static EN_LABELS: Labels = Labels {
    simple: "Simple Task",
    deadline: "Deadline Task",
    important: "Important Task",
    category: "Category",
    due: "Due",
    priority: "Priority",
    status: "Status",
    completed: "Completed",
    pending: "Pending",
};

/// Prompts and feedback printed by the shell.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub menu: &'static [&'static str],
    pub choose_option: &'static str,
    pub invalid_option: &'static str,
    pub not_an_integer: &'static str,
    pub not_a_status: &'static str,
    pub not_a_date: &'static str,
    pub ask_description: &'static str,
    pub ask_category: &'static str,
    pub ask_kind: &'static str,
    pub ask_due: &'static str,
    pub ask_priority: &'static str,
    pub added: &'static str,
    pub tasks_header: &'static str,
    pub updated_header: &'static str,
    pub empty: &'static str,
    pub ask_delete: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub ask_complete: &'static str,
    pub completed: &'static str,
    pub complete_failed: &'static str,
    pub ask_edit_description: &'static str,
    pub ask_new_description: &'static str,
    pub description_edited: &'static str,
    pub ask_edit_category: &'static str,
    pub ask_new_category: &'static str,
    pub category_edited: &'static str,
    pub ask_edit_status: &'static str,
    pub ask_new_status: &'static str,
    pub status_edited: &'static str,
    pub edit_failed: &'static str,
    pub percentage: &'static str,
    pub goodbye: &'static str,
}

pub static PT_MESSAGES: Messages = Messages {
    menu: &[
        "MENU:",
        "1. Adicionar Tarefa",
        "2. Exibir Tarefas",
        "3. Excluir Tarefa",
        "4. Marcar Tarefa como Concluída",
        "5. Editar Descrição da Tarefa",
        "6. Editar Categoria da Tarefa",
        "7. Editar Status da Tarefa",
        "8. Calcular Porcentagem de Tarefas Concluídas",
        "0. Sair",
    ],
    choose_option: "Escolha uma opção:",
    invalid_option: "Opção inválida!",
    not_an_integer: "Por favor, insira um número inteiro válido.",
    not_a_status: "Por favor, insira true ou false.",
    not_a_date: "Data inválida. Use AAAA-MM-DD, AAAA-MM-DD HH:MM ou DD/MM/AAAA.",
    ask_description: "Digite a descrição da tarefa:",
    ask_category: "Digite a categoria da tarefa:",
    ask_kind: "Tipo da tarefa (1 = simples, 2 = com prazo, 3 = importante):",
    ask_due: "Digite o prazo da tarefa:",
    ask_priority: "Digite a prioridade da tarefa:",
    added: "Tarefa adicionada com sucesso:",
    tasks_header: "TAREFAS:",
    updated_header: "TAREFAS ATUALIZADAS:",
    empty: "Nenhuma Tarefa cadastrada",
    ask_delete: "Digite o índice da tarefa a ser excluída:",
    deleted: "Tarefa excluída com sucesso!",
    delete_failed: "Índice inválido. Nenhuma tarefa foi excluída.",
    ask_complete: "Digite o índice da tarefa a ser marcada como concluída:",
    completed: "Tarefa marcada como concluída com sucesso!",
    complete_failed: "Índice inválido. Nenhuma tarefa foi marcada como concluída.",
    ask_edit_description: "Digite o índice da tarefa cuja descrição deseja editar:",
    ask_new_description: "Digite a nova descrição:",
    description_edited: "Descrição da tarefa editada com sucesso!",
    ask_edit_category: "Digite o índice da tarefa cuja categoria deseja editar:",
    ask_new_category: "Digite a nova categoria:",
    category_edited: "Categoria da tarefa editada com sucesso!",
    ask_edit_status: "Digite o índice da tarefa cujo status deseja editar:",
    ask_new_status: "Digite o novo status (true para concluída, false para pendente):",
    status_edited: "Status da tarefa editado com sucesso!",
    edit_failed: "Índice inválido. Nenhuma tarefa foi editada.",
    percentage: "Porcentagem de tarefas concluídas:",
    goodbye: "Saindo...",
};

pub static EN_MESSAGES: Messages = Messages {
    menu: &[
        "MENU:",
        "1. Add Task",
        "2. List Tasks",
        "3. Delete Task",
        "4. Mark Task as Completed",
        "5. Edit Task Description",
        "6. Edit Task Category",
        "7. Edit Task Status",
        "8. Compute Completion Percentage",
        "0. Exit",
    ],
    choose_option: "Choose an option:",
    invalid_option: "Invalid option!",
    not_an_integer: "Please enter a valid integer.",
    not_a_status: "Please enter true or false.",
    not_a_date: "Invalid date. Use YYYY-MM-DD, YYYY-MM-DD HH:MM or DD/MM/YYYY.",
    ask_description: "Enter the task description:",
    ask_category: "Enter the task category:",
    ask_kind: "Task kind (1 = simple, 2 = deadline, 3 = important):",
    ask_due: "Enter the due date:",
    ask_priority: "Enter the task priority:",
    added: "Task added successfully:",
    tasks_header: "TASKS:",
    updated_header: "UPDATED TASKS:",
    empty: "No tasks registered",
    ask_delete: "Enter the position of the task to delete:",
    deleted: "Task deleted successfully!",
    delete_failed: "Invalid position. No task was deleted.",
    ask_complete: "Enter the position of the task to mark as completed:",
    completed: "Task marked as completed successfully!",
    complete_failed: "Invalid position. No task was marked as completed.",
    ask_edit_description: "Enter the position of the task whose description to edit:",
    ask_new_description: "Enter the new description:",
    description_edited: "Task description edited successfully!",
    ask_edit_category: "Enter the position of the task whose category to edit:",
    ask_new_category: "Enter the new category:",
    category_edited: "Task category edited successfully!",
    ask_edit_status: "Enter the position of the task whose status to edit:",
    ask_new_status: "Enter the new status (true for completed, false for pending):",
    status_edited: "Task status edited successfully!",
    edit_failed: "Invalid position. No task was edited.",
    percentage: "Completed tasks percentage:",
    goodbye: "Exiting...",
};
