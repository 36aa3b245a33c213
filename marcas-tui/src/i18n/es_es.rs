//! 西班牙语翻译 (es-ES)

use super::keys::{
    AlertTexts, CategoryTexts, CommonTexts, ConfirmDeleteTexts, FormTexts, HelpTexts, HintTexts,
    ListTexts, ModalTexts, NoticeTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Registro de Marcas",
        loading: "Cargando...",
        not_available: "N/A",
        records: "marcas",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        navigate: "Navegar",
        new: "Nueva",
        edit: "Editar",
        delete: "Eliminar",
        search: "Buscar",
        run_search: "Ejecutar búsqueda",
        clear: "Limpiar",
        reload: "Recargar",
        switch_focus: "Cambiar foco",
        next_field: "Siguiente campo",
        switch_option: "Cambiar",
        submit: "Guardar",
        cancel: "Cancelar",
        back: "Volver",
        help: "Ayuda",
        quit: "Salir",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    list: ListTexts {
        title: "Marcas registradas",
        search_title: "Buscar",
        search_placeholder: "Nombre, titular o número de registro",
        col_name: "Nombre",
        col_holder: "Titular",
        col_number: "N° Registro",
        col_category: "Categoría",
        col_status: "Estado",
        col_date: "Fecha",
        col_actions: "Acciones",
        actions_hint: "Alt+e Alt+d",
        empty: "No hay marcas registradas.",
        empty_hint: "Pulse Alt+a para registrar la primera.",
        empty_search: "No se encontraron marcas.",
        empty_search_hint: "Pulse Alt+c para limpiar la búsqueda.",
    },
    form: FormTexts {
        title_new: "Nueva marca",
        title_edit: "Editar marca",
        name: "Nombre de la marca *",
        holder: "Titular *",
        registration_number: "Número de registro *",
        category: "Categoría *",
        status: "Estado",
        description: "Descripción",
        select: "Seleccione una categoría",
        required_note: "* Campos obligatorios",
        saving: "Guardando...",
        busy: "Espere a que termine la petición en curso",
    },
    categories: CategoryTexts {
        technology: "Tecnología",
        food: "Alimentación",
        textile: "Textil",
        services: "Servicios",
        pharmaceutical: "Farmacéutica",
        automotive: "Automotriz",
        other: "Otros",
    },
    statuses: StatusTexts {
        active: "Activa",
        pending: "Pendiente",
        expired: "Vencida",
        cancelled: "Cancelada",
    },

    // ========================================================================
    // 通知
    // ========================================================================
    notices: NoticeTexts {
        created: "Marca creada exitosamente",
        updated: "Marca actualizada exitosamente",
        deleted: "Marca eliminada exitosamente",
        error_prefix: "Error",
        save_failed: "Error al guardar la marca",
        delete_failed: "Error al eliminar la marca",
        load_failed: "Error al cargar las marcas",
        search_failed: "Error al buscar marcas",
        connection_failed: "No se pudo conectar con el servicio de marcas",
        unexpected_response: "Respuesta inesperada del servicio de marcas",
        missing_fields: "Complete los campos obligatorios",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirmar eliminación",
            message: "¿Está seguro de eliminar esta marca?",
            confirm_button: "Eliminar",
            cancel_button: "Cancelar",
        },
        alert: AlertTexts {
            info_title: "Listo",
            error_title: "Error",
            close_hint: "Pulse Esc o Enter para cerrar",
        },
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Ayuda",
        list_section: "Listado de marcas",
        form_section: "Formulario de marca",
        close_hint: "Pulse Esc para cerrar la ayuda",
    },
};
