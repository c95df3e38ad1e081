// Marketplace authorization hosts
// One constant per supported country site. `MeliClient::auth_url` treats the
// host as an opaque prefix, so values outside this list work too.

/// Argentina
pub const MLA: &str = "https://auth.mercadolibre.com.ar";
/// Brazil
pub const MLB: &str = "https://auth.mercadolivre.com.br";
/// Colombia
pub const MCO: &str = "https://auth.mercadolibre.com.co";
/// Costa Rica
pub const MCR: &str = "https://auth.mercadolibre.com.cr";
/// Ecuador
pub const MEC: &str = "https://auth.mercadolibre.com.ec";
/// Chile
pub const MLC: &str = "https://auth.mercadolibre.cl";
/// Mexico
pub const MLM: &str = "https://auth.mercadolibre.com.mx";
/// Uruguay
pub const MLU: &str = "https://auth.mercadolibre.com.uy";
/// Venezuela
pub const MLV: &str = "https://auth.mercadolibre.com.ve";
/// Panama
pub const MPA: &str = "https://auth.mercadolibre.com.pa";
/// Peru
pub const MPE: &str = "https://auth.mercadolibre.com.pe";
/// Portugal
pub const MPT: &str = "https://auth.mercadolibre.com.pt";
/// Dominican Republic
pub const MRD: &str = "https://auth.mercadolibre.com.do";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_are_normalized() {
        let hosts = [
            MLA, MLB, MCO, MCR, MEC, MLC, MLM, MLU, MLV, MPA, MPE, MPT, MRD,
        ];
        for host in hosts {
            assert!(host.starts_with("https://auth."), "unexpected host {host}");
            assert!(!host.ends_with('/'), "trailing slash in {host}");
        }
    }
}
