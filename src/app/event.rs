use super::mode::Mode;
use super::state::AppState;
use crate::utils::unicode::{next_char_boundary, prev_char_boundary};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state)?,
        Mode::FilePrompt | Mode::UrlPrompt => handle_prompt_mode(key, state)?,
        Mode::ConfirmClear => handle_confirm_mode(key, state)?,
        Mode::Alert => state.dismiss_alert(),
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.move_cursor_up();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.move_cursor_down();
        }
        (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
            state.cursor_position = 0;
        }
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => {
            state.move_cursor_to_end();
        }

        // "Click" the row: copy and mark
        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            state.copy_selected()?;
        }

        (KeyCode::Char('f'), KeyModifiers::NONE) => state.start_prompt(Mode::FilePrompt),
        (KeyCode::Char('u'), KeyModifiers::NONE) => state.start_prompt(Mode::UrlPrompt),
        (KeyCode::Char('c'), KeyModifiers::NONE) => state.mode = Mode::ConfirmClear,
        (KeyCode::Char('l'), KeyModifiers::NONE) => state.open_link(),

        (KeyCode::Char('?'), _) => {
            state.show_help = true;
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            state.should_quit = true;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }

        _ => {}
    }

    Ok(())
}

fn handle_prompt_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Navigate;
            state.edit_buffer.clear();
            state.edit_cursor_pos = 0;
        }
        KeyCode::Enter => {
            let input = std::mem::take(&mut state.edit_buffer);
            let prompt = state.mode;
            state.edit_cursor_pos = 0;
            state.mode = Mode::Navigate;
            match prompt {
                Mode::FilePrompt => state.import_from_path(&input)?,
                Mode::UrlPrompt => state.start_remote_import(&input),
                _ => {}
            }
        }
        KeyCode::Backspace => {
            if state.edit_cursor_pos > 0 {
                let prev = prev_char_boundary(&state.edit_buffer, state.edit_cursor_pos);
                state.edit_buffer.remove(prev);
                state.edit_cursor_pos = prev;
            }
        }
        KeyCode::Left => {
            state.edit_cursor_pos = prev_char_boundary(&state.edit_buffer, state.edit_cursor_pos);
        }
        KeyCode::Right => {
            state.edit_cursor_pos = next_char_boundary(&state.edit_buffer, state.edit_cursor_pos);
        }
        KeyCode::Home => {
            state.edit_cursor_pos = 0;
        }
        KeyCode::End => {
            state.edit_cursor_pos = state.edit_buffer.len();
        }
        KeyCode::Char(c) => {
            state.edit_buffer.insert(state.edit_cursor_pos, c);
            state.edit_cursor_pos += c.len_utf8();
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.confirm_clear(true)?,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.confirm_clear(false)?,
        _ => {}
    }
    Ok(())
}
