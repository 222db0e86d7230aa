use url::form_urlencoded;

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

// Builds the links handed back to a guest after a successful confirmation.
#[derive(Debug, Clone)]
pub struct ShareLinks {
    // Public origin of this gateway, without trailing slash.
    public_base_url: String,
}

impl ShareLinks {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();
        Self { public_base_url }
    }

    // Absolute URL of the QR image route for a confirmation number.
    pub fn qr_url(&self, confirmation_number: &str) -> String {
        format!(
            "{}/qr-code/{}",
            self.public_base_url,
            encode_component(confirmation_number)
        )
    }

    // Deep link opening a chat share intent with the confirmation message pre-filled.
    pub fn whatsapp_url(&self, phone: &str, guest_name: &str, confirmation_number: &str) -> String {
        let message = confirmation_message(
            guest_name,
            confirmation_number,
            &self.qr_url(confirmation_number),
        );
        format!(
            "{WHATSAPP_SEND_URL}?phone={}&text={}",
            encode_component(phone),
            encode_component(&message)
        )
    }
}

fn confirmation_message(guest_name: &str, confirmation_number: &str, qr_url: &str) -> String {
    format!(
        "🎉 ¡Hola {guest_name}!\n\n\
         ¡Tu asistencia a nuestra boda ha sido confirmada!\n\n\
         📅 Fecha: 30 de Octubre 2026\n\
         🕕 Hora: 4:00 PM\n\
         📍 Lugar: Lienzo Charro \"La Tapatía\"\n\n\
         🎫 Código de confirmación: {confirmation_number}\n\n\
         📲 Presenta este QR el día de la boda:\n{qr_url}\n\n\
         ¡Nos vemos en la celebración!\n\
         💕 Cecilia & Ángel"
    )
}

// Percent-encode a single URL component; spaces become %20 rather than '+'.
pub(crate) fn encode_component(raw: &str) -> String {
    // The form serializer already escapes a literal '+' as %2B, so any '+' left is a space.
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
