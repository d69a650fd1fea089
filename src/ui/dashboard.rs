// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Header, trois cartes de résumé (Entradas, Saídas, Total), tableau des
// transactions et footer des raccourcis.
//
// CONCEPTS RATATUI :
// 1. Layout : découpage vertical puis horizontal pour les cartes
// 2. Table + TableState : tableau avec ligne sélectionnée
// 3. Style : couleurs selon le type de transaction
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, LoadState};
use crate::models::DisplayTransaction;

/// En-têtes du tableau, dans l'ordre des colonnes
pub const TABLE_HEADERS: [&str; 4] = ["Título", "Preço", "Categoria", "Data"];

/// Une carte de résumé
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,

    /// La carte Total est mise en avant (mêmes données, autre style)
    pub highlighted: bool,
}

/// Dessine l'interface complète
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, chunks[0]);
    render_cards(frame, app, chunks[1]);
    render_table(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

/// Header, cartes, tableau, footer
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Cartes
            Constraint::Min(0),    // Tableau : tout le reste
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" LazyFinances ")
        .title_alignment(Alignment::Center);

    let text = Line::from(Span::styled(
        "Controle financeiro",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Cartes de résumé
// ============================================================================

/// Contenu des trois cartes, dans l'ordre fixe income, outcome, total
pub fn summary_cards(app: &App) -> [SummaryCard; 3] {
    let placeholder = match app.load_state {
        LoadState::Loading => "...",
        _ => "--",
    };

    let (income, outcome, total) = match app.balance() {
        Some(balance) => (
            balance.income.clone(),
            balance.outcome.clone(),
            balance.total.clone(),
        ),
        None => (
            placeholder.to_string(),
            placeholder.to_string(),
            placeholder.to_string(),
        ),
    };

    [
        SummaryCard {
            label: "Entradas",
            value: income,
            highlighted: false,
        },
        SummaryCard {
            label: "Saídas",
            value: outcome,
            highlighted: false,
        },
        SummaryCard {
            label: "Total",
            value: total,
            highlighted: true,
        },
    ]
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (card, column) in summary_cards(app).iter().zip(columns.iter()) {
        let (block_style, value_style) = if card.highlighted {
            (
                Style::default().fg(Color::Black).bg(Color::Yellow),
                Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .style(block_style)
            .title(format!(" {} ", card.label));

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(card.value.clone(), value_style)),
        ];

        let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
        frame.render_widget(paragraph, *column);
    }
}

// ============================================================================
// Tableau des transactions
// ============================================================================

/// Cellules d'une ligne : titre, prix, catégorie, date
pub fn row_cells(transaction: &DisplayTransaction) -> [String; 4] {
    [
        transaction.title.clone(),
        transaction.value_cell(),
        transaction.category.title.clone(),
        transaction.formatted_date.clone(),
    ]
}

fn transaction_row(transaction: &DisplayTransaction) -> Row<'static> {
    let value_color = if transaction.is_outcome() {
        Color::Red
    } else {
        Color::Green
    };

    let [title, value, category, date] = row_cells(transaction);

    Row::new(vec![
        Cell::from(title).style(Style::default().fg(Color::White)),
        Cell::from(value).style(Style::default().fg(value_color)),
        Cell::from(category),
        Cell::from(date),
    ])
}

/// Titre du tableau, avec la position de la ligne sélectionnée
fn table_title(app: &App) -> String {
    match app.selected_transaction() {
        Some(_) => format!(" Transações ({}/{}) ", app.selected_index + 1, app.transactions().len()),
        None => " Transações ".to_string(),
    }
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(table_title(app));

    // Pas de tableau tant qu'il n'y a rien à montrer
    let message = match &app.load_state {
        LoadState::Loading => Some(("Carregando...".to_string(), Color::Gray)),
        LoadState::Failed(error) => Some((format!("Erro ao carregar transações : {}", error), Color::Red)),
        LoadState::Loaded(dashboard) if dashboard.transactions.is_empty() => {
            Some(("Nenhuma transação".to_string(), Color::Gray))
        }
        LoadState::Loaded(_) => None,
    };

    if let Some((text, color)) = message {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(text, Style::default().fg(color))),
        ])
        .block(block)
        .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(TABLE_HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = app.transactions().iter().map(transaction_row).collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    // CONCEPT RATATUI : TableState
    // - Porte la sélection le temps d'une frame
    // - L'index de référence reste dans App
    let mut state = TableState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

// ============================================================================
// Footer : Instructions
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled("⚠  Appuyez sur ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit  "),
            Span::styled("[↑↓ / j k]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Navigate"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts]).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================
