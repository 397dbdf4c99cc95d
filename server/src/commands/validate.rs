use color_eyre::Result;

use crate::emailjs::EmailJsConfig;

pub(crate) fn validate() -> Result<()> {
    println!("Validating EmailJS configuration...");
    let config = EmailJsConfig::from_env()?;

    println!(
        "Messages go through service {} using template {}",
        config.service_id, config.template_id
    );
    if config.access_token.is_none() {
        println!("No EMAILJS_PRIVATE_KEY set, fine unless strict mode is on");
    }
    println!("Sending to {}", config.api_url);

    println!("Configuration Valid! ✅");

    Ok(())
}
