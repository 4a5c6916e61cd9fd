//! Terminal rendering of the screens.

use anyhow::Result;
use colored::Colorize;

use pix_core::messages;
use pix_core::{LoginScreen, PixScreen, PixView, RegisterScreen};

use crate::output;

pub fn login(screen: &LoginScreen) {
    output::heading("🔒 Login");
    if let Some(error) = screen.error() {
        output::error(error);
    }
    output::hint("Entre com: pix login --email <e-mail> --password <senha>");
    output::hint("Não tem conta? pix register --email <e-mail> --password <senha>");
}

pub fn register(screen: &RegisterScreen) {
    output::heading("📝 Cadastro");
    if let Some(error) = screen.error() {
        output::error(error);
    }
    if let Some(message) = screen.message() {
        output::success(message);
    }
}

/// Render the PIX screen, or its details as JSON.
pub fn pix(screen: &PixScreen, json: bool) -> Result<()> {
    if json {
        if let Some(info) = screen.info() {
            output::json_pretty(info)?;
        }
        if let Some(error) = screen.error() {
            output::error(error);
        }
        return Ok(());
    }

    output::heading("💰 PIX de Confirmação (Simulado)");
    if let Some(error) = screen.error() {
        output::error(error);
    }

    match screen.view() {
        PixView::Loading => println!("{}", messages::PIX_LOADING.dimmed()),
        PixView::Loaded(info) => {
            println!("O PIX de 1 centavo confirma sua conta e é necessário apenas uma vez.");
            println!();
            output::field("Chave PIX (Telefone)", &info.key);
            output::field("Valor", &format!("R$ {}", info.amount));
            println!();
            println!("{}", "Código Copia e Cola:".bold());
            println!("{}", info.copy_paste_code.yellow());
            println!();
            output::button(screen.copy_label());
            output::hint(
                "Instrução: Abra o app do seu banco, escolha PIX Copia e Cola e cole o código acima.",
            );
        }
    }

    Ok(())
}
